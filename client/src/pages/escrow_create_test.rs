use super::*;

#[test]
fn invite_path_targets_new_escrow() {
    assert_eq!(invite_path("42"), "/escrows/42/invite");
}
