// src/servers/render.rs - HTML projection of a game session

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::game::{Direction, GameStatus};
use crate::services::GameSession;

const SHARE_ENDPOINT: &str = "https://warpcast.com/~/compose?text=";

/// RFC 3986 unreserved characters pass through, everything else is %XX.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

const PAGE_STYLE: &str = r#"
body { font-family: sans-serif; display: flex; flex-direction: column; align-items: center; gap: 16px; margin-top: 40px; }
.grid { display: grid; grid-template-columns: repeat(4, 48px); gap: 8px; }
.cell { width: 48px; height: 48px; display: flex; align-items: center; justify-content: center; background: #e5e7eb; border-radius: 4px; font-size: 1.25rem; font-weight: bold; }
.controls { display: flex; gap: 8px; }
.controls button { width: 48px; height: 40px; font-size: 1.25rem; }
.score { font-size: 1.125rem; }
.result { display: flex; flex-direction: column; align-items: center; gap: 8px; }
.message { font-size: 1.25rem; }
"#;

/// `I scored <score> in 2048! <app-url>`
pub fn share_text(score: u32, app_url: &str) -> String {
    format!("I scored {} in 2048! {}", score, app_url)
}

/// Outbound link handing the share text to the compose page.
pub fn share_link(text: &str) -> String {
    format!("{}{}", SHARE_ENDPOINT, utf8_percent_encode(text, QUERY_COMPONENT))
}

pub fn terminal_message(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Playing => None,
        GameStatus::Won => Some("You won!"),
        GameStatus::Lost => Some("Game Over"),
    }
}

/// Full page for one session: grid, direction buttons, score and, once the
/// game is over, the result with a share link.
pub fn render_game_page(session: &GameSession, app_url: &str) -> String {
    let state = &session.state;
    let status = state.status();
    let code = escape_html(&session.code);

    let mut html = String::from("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>2048</title>");
    html.push_str(&format!("<style>{}</style></head>\n<body>\n", PAGE_STYLE));
    html.push_str("<h1>2048</h1>\n<div class=\"grid\">\n");
    for value in state.board.tiles() {
        if value == 0 {
            html.push_str("<div class=\"cell\"></div>\n");
        } else {
            html.push_str(&format!("<div class=\"cell\"><span>{}</span></div>\n", value));
        }
    }
    html.push_str("</div>\n<div class=\"controls\">\n");

    let disabled = if status.is_over() { " disabled" } else { "" };
    for direction in Direction::ALL {
        html.push_str(&format!(
            "<form method=\"post\" action=\"/games/{}/{}\"><button type=\"submit\" aria-label=\"{}\"{}>{}</button></form>\n",
            code,
            direction,
            direction,
            disabled,
            direction.arrow()
        ));
    }
    html.push_str("</div>\n");
    html.push_str(&format!("<div class=\"score\">Score: {}</div>\n", state.score));

    if let Some(message) = terminal_message(status) {
        let text = share_text(state.score, app_url);
        html.push_str("<div class=\"result\">\n");
        html.push_str(&format!("<div class=\"message\">{}</div>\n", message));
        html.push_str(&format!(
            "<a class=\"share\" href=\"{}\" target=\"_blank\" rel=\"noopener\">Share</a>\n",
            escape_html(&share_link(&text))
        ));
        html.push_str("</div>\n");
    }

    html.push_str("<a href=\"/\">New game</a>\n</body></html>\n");
    html
}

pub fn render_not_found_page(key: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>2048</title></head>\n<body>\n<h1>Game not found</h1>\n<p>No game with code {}.</p>\n<a href=\"/\">New game</a>\n</body></html>\n",
        escape_html(key)
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, GameState};

    fn session(board: Board, score: u32, won: bool, game_over: bool) -> GameSession {
        GameSession {
            id: "id".to_string(),
            code: "QWERTY".to_string(),
            created_at: 0,
            state: GameState {
                board,
                score,
                won,
                game_over,
                moves: 0,
            },
        }
    }

    #[test]
    fn test_share_text_format() {
        assert_eq!(share_text(2048, "https://app.test"), "I scored 2048 in 2048! https://app.test");
    }

    #[test]
    fn test_share_link_percent_encodes() {
        let link = share_link("I scored 4 in 2048! https://a.test/x?y=1");
        assert_eq!(
            link,
            "https://warpcast.com/~/compose?text=I%20scored%204%20in%202048%21%20https%3A%2F%2Fa.test%2Fx%3Fy%3D1"
        );
        assert_eq!(share_link("~é-_."), "https://warpcast.com/~/compose?text=~%C3%A9-_.");
    }

    #[test]
    fn test_page_renders_sixteen_cells_and_blanks() {
        let board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 1024]]);
        let html = render_game_page(&session(board, 0, false, false), "u");

        assert_eq!(html.matches("class=\"cell\"").count(), 16);
        assert_eq!(html.matches("<span>").count(), 2);
        assert!(html.contains("<span>1024</span>"));
        assert!(html.contains("Score: 0"));
        assert!(html.contains("action=\"/games/QWERTY/left\""));
        assert!(!html.contains("disabled"));
        assert!(!html.contains("Game Over"));
        assert!(!html.contains("Share"));
    }

    #[test]
    fn test_lost_page_shows_game_over_and_share() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let html = render_game_page(&session(board, 48, false, true), "https://app.test");

        assert!(html.contains("Game Over"));
        assert!(!html.contains("You won!"));
        assert!(html.contains("I%20scored%2048%20in%202048%21"));
        assert_eq!(html.matches(" disabled>").count(), 4);
    }

    #[test]
    fn test_won_page_message() {
        let board = Board::from_rows([[2048, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let html = render_game_page(&session(board, 2092, true, true), "u");
        assert!(html.contains("You won!"));
        assert_eq!(terminal_message(GameStatus::Playing), None);
    }

    #[test]
    fn test_not_found_page_escapes_key() {
        let html = render_not_found_page("<script>");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
