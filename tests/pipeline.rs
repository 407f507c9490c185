use std::collections::VecDeque;
use std::io::{self, Cursor};
use std::sync::Mutex;

use anyhow::Result;
use cfbrowse::app::App;
use cfbrowse::config::Config;
use cfbrowse::engine::sort::SortOrder;
use cfbrowse::engine::tags::TagResolver;
use cfbrowse::remote::schema::parse_problemset;
use cfbrowse::remote::{FetchError, JudgeApi};
use cfbrowse::session::pager::PagerInput;
use cfbrowse::session::problem::{Problem, ProblemKey, SolvedSet};
use cfbrowse::ui::screen::Screen;
use cfbrowse::ui::table::Frame;

const PROBLEMSET: &str = r#"{
    "status": "OK",
    "result": {
        "problems": [
            {"contestId": 1, "index": "A", "name": "Easy", "type": "PROGRAMMING", "rating": 900, "tags": ["dp"]},
            {"contestId": 1, "index": "B", "name": "Medium", "type": "PROGRAMMING", "rating": 1500, "tags": ["graphs"]},
            {"contestId": 2, "index": "C", "name": "Hard", "type": "PROGRAMMING", "rating": 1700, "tags": ["dp", "graphs"]}
        ],
        "problemStatistics": [
            {"contestId": 1, "index": "A", "solvedCount": 50},
            {"contestId": 1, "index": "B", "solvedCount": 10},
            {"contestId": 2, "index": "C", "solvedCount": 30}
        ]
    }
}"#;

struct StaticJudge {
    problems: Vec<Problem>,
    solved: Vec<ProblemKey>,
    requested: Mutex<Vec<String>>,
    broken: bool,
}

impl StaticJudge {
    fn new() -> Self {
        Self {
            problems: parse_problemset(PROBLEMSET).unwrap(),
            solved: vec![ProblemKey::new(1, "A")],
            requested: Mutex::new(Vec::new()),
            broken: false,
        }
    }
}

impl JudgeApi for StaticJudge {
    fn problems_by_tags(&self, tags: &[&str]) -> Result<Vec<Problem>, FetchError> {
        self.requested
            .lock()
            .unwrap()
            .extend(tags.iter().map(|t| t.to_string()));
        if self.broken {
            return Err(FetchError::Status {
                endpoint: "problemset.problems",
                status: "502 Bad Gateway".to_string(),
            });
        }
        Ok(self.problems.clone())
    }

    fn solved_problems(&self, _handle: &str) -> Result<SolvedSet, FetchError> {
        Ok(self.solved.iter().cloned().collect())
    }
}

struct KeyScreen {
    keys: VecDeque<PagerInput>,
    frames: Vec<Frame>,
}

impl Screen for KeyScreen {
    fn size(&self) -> io::Result<(u16, u16)> {
        Ok((100, 40))
    }

    fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn message(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }

    fn read_input(&mut self) -> Result<PagerInput> {
        Ok(self.keys.pop_front().unwrap_or(PagerInput::Quit))
    }

    fn read_line(&mut self, _prompt: &str) -> Result<String> {
        Ok(String::new())
    }
}

#[test]
fn test_typo_topics_end_to_end() {
    let resolution = TagResolver::default().resolve(&["dp", "grpahs"]);
    assert_eq!(resolution.get("dp"), Some("dp"));
    assert_eq!(resolution.get("grpahs"), Some("graphs"));

    let judge = StaticJudge::new();
    let app = App::new(Config::default());
    let mut input = Cursor::new("dp, grpahs\n1000 2000 d\n");
    let mut out = Vec::new();
    let results = app.collect(&judge, &mut input, &mut out).unwrap();

    assert_eq!(*judge.requested.lock().unwrap(), vec!["dp", "graphs"]);
    assert_eq!(results.query.order, SortOrder::Descending);
    let ratings: Vec<u32> = results.problems.iter().map(|p| p.rating).collect();
    assert_eq!(ratings, vec![1700, 1500]);
    assert!(results.solved.contains(&ProblemKey::new(1, "A")));

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("grpahs -> graphs"));

    let mut screen = KeyScreen {
        keys: VecDeque::from(vec![PagerInput::Next, PagerInput::Quit]),
        frames: Vec::new(),
    };
    app.browse(&mut screen, &results).unwrap();

    // one page of two rows; 'n' repaints the same page, 'q' leaves
    assert_eq!(screen.frames.len(), 2);
    assert_eq!(screen.frames[0], screen.frames[1]);
    let frame = &screen.frames[0];
    assert_eq!(frame.lines.len(), 2 + 4);
    assert_eq!(frame.lines[frame.lines.len() - 2], "Page 1 of 1");
    assert!(frame.lines[1].contains("Hard"));
    assert!(frame.lines[2].contains("Medium"));
}

#[test]
fn test_empty_topics_do_not_fetch() {
    let judge = StaticJudge::new();
    let app = App::new(Config::default());
    let mut input = Cursor::new(" , \n1000 2000 d\n");
    let mut out = Vec::new();
    assert!(app.collect(&judge, &mut input, &mut out).is_err());
    assert!(judge.requested.lock().unwrap().is_empty());
}

#[test]
fn test_fetch_failure_is_fatal() {
    let mut judge = StaticJudge::new();
    judge.broken = true;
    let app = App::new(Config::default());
    let mut input = Cursor::new("dp\n1000 2000\n");
    let mut out = Vec::new();
    let err = app.collect(&judge, &mut input, &mut out).unwrap_err();
    assert!(format!("{err:#}").contains("502 Bad Gateway"));
}
