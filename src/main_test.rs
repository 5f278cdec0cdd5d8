use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("arguments should parse")
}

#[test]
fn token_seeds_session_with_member_name() {
    let cli = parse(&["bulletin", "--token", "t-1", "--member-id", "alice", "--member-name", "앨리스", "me"]);
    let auth = AuthState::new();
    seed_session(&auth, &cli);

    assert_eq!(auth.token().as_deref(), Some("t-1"));
    assert_eq!(auth.member_id().as_deref(), Some("alice"));
    assert_eq!(auth.member_name().as_deref(), Some("앨리스"));
}

#[test]
fn member_name_defaults_to_member_id() {
    let cli = parse(&["bulletin", "--token", "t-1", "--member-id", "alice", "me"]);
    if cli.member_name.is_some() {
        // BOARD_MEMBER_NAME is set in this environment.
        return;
    }
    let auth = AuthState::new();
    seed_session(&auth, &cli);

    assert_eq!(auth.member_name().as_deref(), Some("alice"));
}

#[test]
fn no_token_leaves_session_empty() {
    let cli = parse(&["bulletin", "--member-name", "앨리스", "categories"]);
    if cli.token.is_some() {
        return;
    }
    let auth = AuthState::new();
    seed_session(&auth, &cli);

    assert!(!auth.is_logged_in());
    assert_eq!(auth.member_name(), None);
}
