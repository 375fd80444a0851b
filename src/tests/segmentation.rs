//! Clause segmentation boundary behavior.

use crate::clause::segment_clauses;

#[test]
fn test_short_fragments_are_discarded() {
    let short = "a".repeat(40);
    let long = "b".repeat(51);
    assert_eq!(short.chars().count(), 40);
    assert_eq!(long.chars().count(), 51);

    let text = format!("Preamble\n1. {}\n2. {}", short, long);
    let clauses = segment_clauses(&text);

    // 40 chars is under the threshold, 51 survives.
    assert_eq!(clauses, vec![long]);
}

#[test]
fn test_splits_on_numbered_markers() {
    let text = "\n1. The Employee shall report to the office every working day of the week.\
                \n2. The Company shall pay the salary on the first working day of each month.";
    let clauses = segment_clauses(text);
    assert_eq!(clauses.len(), 2);
    assert!(clauses[0].starts_with("The Employee"));
    assert!(clauses[1].starts_with("The Company"));
}

#[test]
fn test_splits_on_lettered_and_recital_markers() {
    let text = "WHEREAS the parties wish to record the terms of their engagement in writing;\
                \n(a) the Contractor shall deliver the services described in the schedule hereto;\
                \nNOW THEREFORE the parties agree to the covenants and conditions stated below.";
    let clauses = segment_clauses(text);
    assert_eq!(clauses.len(), 3);
}

#[test]
fn test_splits_on_section_headers() {
    let text = "\nPAYMENT TERMS: The Client shall pay all invoices within thirty days of receipt.\
                \nCONFIDENTIALITY: Each party shall keep the other party's information secret.";
    let clauses = segment_clauses(text);
    assert_eq!(clauses.len(), 2);
}

#[test]
fn test_document_order_is_preserved() {
    let text = "\n1. First clause body that is comfortably longer than fifty characters overall.\
                \n2. Second clause body that is also comfortably longer than fifty characters.";
    let clauses = segment_clauses(text);
    assert!(clauses[0].starts_with("First"));
    assert!(clauses[1].starts_with("Second"));
}
