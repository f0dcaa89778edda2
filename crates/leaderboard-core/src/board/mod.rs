//! Score board domain.

pub mod model;

pub use model::{default_board, ScoreBoard, TeamScore, DEFAULT_TEAMS};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    const DEFAULT_BOARD_JSON: &str = concat!(
        r##"[{"id":1,"name":"Volleyball","color":"#FF69B4","score":0,"emoji":"🏐"},"##,
        r##"{"id":2,"name":"Baking","color":"#9370DB","score":0,"emoji":"🧁"},"##,
        r##"{"id":3,"name":"Basketball","color":"#FF8C00","score":0,"emoji":"🏀"},"##,
        r##"{"id":4,"name":"Science","color":"#32CD32","score":0,"emoji":"🔬"}]"##,
    );

    #[test]
    fn test_default_board() {
        let board = default_board();
        assert_eq!(board.teams().len(), 4);
        let ids: Vec<i64> = board.teams().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert!(board.teams().iter().all(|t| t.score == 0));
        assert_eq!(board.team(2).map(|t| t.name.as_str()), Some("Baking"));
    }

    #[test]
    fn test_default_json_matches_default_board() {
        let parsed = ScoreBoard::from_json(DEFAULT_BOARD_JSON).unwrap();
        assert_eq!(parsed, default_board());
        assert_eq!(default_board().to_json().unwrap(), DEFAULT_BOARD_JSON);
    }

    #[test]
    fn test_parse_preserves_order() {
        let input = r##"[
            {"id":7,"name":"Chess","color":"#000000","score":12,"emoji":"♟"},
            {"id":3,"name":"Basketball","color":"#FF8C00","score":5,"emoji":"🏀"}
        ]"##;
        let board = ScoreBoard::from_json(input).unwrap();
        assert_eq!(board.teams()[0].id, 7);
        assert_eq!(board.teams()[1].score, 5);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let board = ScoreBoard::new(vec![TeamScore::new(1, "Volleyball", "#FF69B4", "🏐").with_score(5)]).unwrap();
        let value = serde_json::to_value(&board).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["score"], 5);
    }

    #[test]
    fn test_rejects_non_json() {
        assert!(matches!(ScoreBoard::from_json("not json"), Err(BoardError::Json(_))));
    }

    #[test]
    fn test_rejects_schema_mismatch() {
        assert!(ScoreBoard::from_json(r#"{"id":1}"#).is_err());
        assert!(ScoreBoard::from_json(r#"[{"id":1,"name":"A"}]"#).is_err());
        assert!(ScoreBoard::from_json(r##"[{"id":"1","name":"A","color":"#fff","score":0,"emoji":"x"}]"##).is_err());
    }

    #[test]
    fn test_rejects_empty_board() {
        assert!(matches!(ScoreBoard::new(vec![]), Err(BoardError::Empty)));
        assert!(ScoreBoard::from_json("[]").is_err());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let teams = vec![
            TeamScore::new(1, "A", "#111111", "a"),
            TeamScore::new(1, "B", "#222222", "b"),
        ];
        assert!(matches!(ScoreBoard::new(teams), Err(BoardError::DuplicateId(1))));
    }
}
