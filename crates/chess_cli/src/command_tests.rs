use super::*;

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

#[test]
fn test_moves() {
    let expected = Command::Move {
        from: sq("e2"),
        to: sq("e4"),
    };
    assert_eq!(Command::parse("move e2 e4").unwrap(), Some(expected.clone()));
    assert_eq!(Command::parse("  e2 e4 ").unwrap(), Some(expected.clone()));
    assert_eq!(Command::parse("MOVE E2 E4").unwrap(), Some(expected));
}

#[test]
fn test_keywords() {
    assert_eq!(Command::parse("back").unwrap(), Some(Command::Back));
    assert_eq!(Command::parse("next").unwrap(), Some(Command::Next));
    assert_eq!(Command::parse("exit").unwrap(), Some(Command::Exit));
    assert_eq!(Command::parse("quit").unwrap(), Some(Command::Exit));
    assert_eq!(Command::parse("board").unwrap(), Some(Command::Board));
    assert_eq!(Command::parse("").unwrap(), None);
    assert_eq!(Command::parse("   ").unwrap(), None);
}

#[test]
fn test_square_commands() {
    assert_eq!(Command::parse("hint g1").unwrap(), Some(Command::Hint(sq("g1"))));
    assert_eq!(
        Command::parse("threats d5").unwrap(),
        Some(Command::Threats(sq("d5")))
    );
    assert!(Command::parse("hint").is_err());
    assert!(Command::parse("hint z9").is_err());
}

#[test]
fn test_file_commands_keep_case() {
    assert_eq!(
        Command::parse("save Games/My Game.txt").unwrap(),
        Some(Command::Save(PathBuf::from("Games/My Game.txt")))
    );
    assert_eq!(
        Command::parse("load game.txt").unwrap(),
        Some(Command::Load(PathBuf::from("game.txt")))
    );
    assert!(Command::parse("save").is_err());
}

#[test]
fn test_malformed_moves() {
    assert!(Command::parse("move e2").is_err());
    assert!(Command::parse("e2 e9").is_err());
    assert!(Command::parse("e2").is_err());
    assert!(Command::parse("castle kingside").is_err());
}
