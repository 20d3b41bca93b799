use cipher_core::{CipherEngine, CipherMode, CipherOutput, Direction, ShiftCandidate};
use crossterm::style::Stylize;
use crossterm::{cursor, execute, terminal};
use std::io::{stdin, stdout, Write};

const DEFAULT_SHIFT: i32 = 3;
const DEFAULT_KEYWORD: &str = "CYBER";
const DEFAULT_SHIFTS: [i32; 3] = [3, 5, 7];
const DEFAULT_PATTERN: [i32; 3] = [1, 3, 5];

const BRUTE_FORCE_GUIDANCE: &str = "Switch to decrypt mode to use brute force";

#[derive(Clone, Copy, PartialEq, Eq)]
enum ModeSelect {
    Caesar,
    BruteForce,
    MultiShift,
    Keyword,
    Pattern,
}

impl ModeSelect {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "caesar" => Some(ModeSelect::Caesar),
            "brute" | "bruteforce" => Some(ModeSelect::BruteForce),
            "multi" | "multi-shift" => Some(ModeSelect::MultiShift),
            "keyword" | "vigenere" => Some(ModeSelect::Keyword),
            "pattern" => Some(ModeSelect::Pattern),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ModeSelect::Caesar => "Caesar",
            ModeSelect::BruteForce => "Brute Force",
            ModeSelect::MultiShift => "Multi-Shift",
            ModeSelect::Keyword => "Keyword (Vigenere)",
            ModeSelect::Pattern => "Custom Pattern",
        }
    }
}

/// Studio widget state: the input text, the direction toggle, the mode
/// selector, and each mode's parameters.
struct Session {
    input: String,
    direction: Direction,
    selected: ModeSelect,
    shift: i32,
    keyword: String,
    shifts: Vec<i32>,
    pattern: Vec<i32>,
    notice: Option<String>,
}

/// What the output panel shows for the current session state.
enum View {
    Blank,
    Text(String),
    Candidates(Vec<ShiftCandidate>),
    Guidance(&'static str),
}

impl Session {
    fn new() -> Self {
        Self {
            input: String::new(),
            direction: Direction::Encrypt,
            selected: ModeSelect::Caesar,
            shift: DEFAULT_SHIFT,
            keyword: DEFAULT_KEYWORD.to_string(),
            shifts: DEFAULT_SHIFTS.to_vec(),
            pattern: DEFAULT_PATTERN.to_vec(),
            notice: None,
        }
    }

    fn mode(&self) -> CipherMode {
        match self.selected {
            ModeSelect::Caesar => CipherMode::Caesar { shift: self.shift },
            ModeSelect::BruteForce => CipherMode::BruteForce,
            ModeSelect::MultiShift => CipherMode::MultiShift {
                shifts: self.shifts.clone(),
            },
            ModeSelect::Keyword => CipherMode::Keyword {
                keyword: self.keyword.clone(),
            },
            ModeSelect::Pattern => CipherMode::Pattern {
                pattern: self.pattern.clone(),
            },
        }
    }

    // Recomputed on every loop pass, so any state change is reflected
    // immediately.
    fn recompute(&self, engine: &CipherEngine) -> View {
        if self.input.is_empty() {
            return View::Blank;
        }
        if self.selected == ModeSelect::BruteForce && self.direction == Direction::Encrypt {
            return View::Guidance(BRUTE_FORCE_GUIDANCE);
        }
        match engine.apply(&self.input, &self.mode(), self.direction) {
            CipherOutput::Text(text) => View::Text(text),
            CipherOutput::Candidates(candidates) => View::Candidates(candidates),
        }
    }
}

fn main() {
    let engine = CipherEngine::new();
    let mut session = Session::new();

    loop {
        let view = session.recompute(&engine);
        print_ui(&session, &view);

        let mut line = String::new();
        let bytes_read = stdin().read_line(&mut line).unwrap();
        if bytes_read == 0 {
            break; // EOF
        }
        let cmd = line.trim();

        match cmd {
            "exit" => break,
            "" => {}
            "swap" => {
                session.direction = session.direction.toggled();
                session.notice = None;
            }
            "reset" => {
                session.input.clear();
                session.shift = DEFAULT_SHIFT;
                session.notice = None;
            }
            "json" => dump_json(&view),
            s if s.starts_with(':') && s.len() > 1 => {
                // Adopt a brute force candidate as the new input text.
                if let View::Candidates(candidates) = &view {
                    if let Ok(n) = s[1..].parse::<usize>() {
                        if n >= 1 && n <= candidates.len() {
                            session.input = candidates[n - 1].result.clone();
                            session.notice = Some(format!("Adopted candidate :{} as input", n));
                        }
                    }
                }
            }
            s => handle_command(&mut session, s),
        }
    }
}

fn handle_command(session: &mut Session, cmd: &str) {
    session.notice = None;
    let Some((verb, rest)) = cmd.split_once(' ') else {
        session.input = cmd.to_string();
        return;
    };
    let rest = rest.trim();

    match verb {
        "mode" => match ModeSelect::parse(rest) {
            Some(selected) => session.selected = selected,
            None => session.notice = Some(format!("Unknown mode '{}'", rest)),
        },
        "shift" => match rest.parse() {
            Ok(shift) => session.shift = shift,
            Err(_) => session.notice = Some("Shift must be an integer".to_string()),
        },
        "shifts" => match parse_shift_list(rest) {
            Some(shifts) => session.shifts = shifts,
            None => session.notice = Some("Shifts must be comma-separated integers".to_string()),
        },
        "keyword" => session.keyword = rest.to_string(),
        "pattern" => match parse_shift_list(rest) {
            Some(pattern) => session.pattern = pattern,
            None => session.notice = Some("Pattern must be comma-separated integers".to_string()),
        },
        _ => session.input = cmd.to_string(),
    }
}

fn parse_shift_list(raw: &str) -> Option<Vec<i32>> {
    raw.split(',')
        .map(|part| part.trim().parse::<i32>().ok())
        .collect()
}

fn print_ui(session: &Session, view: &View) {
    let mut out = stdout();
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
    .unwrap();

    println!("{}", "Cipher Studio".bold().magenta());
    println!("---------------------------------------------------------------");
    println!("Modes: caesar, brute, multi, keyword, pattern.");
    println!("Commands: mode <m>, shift <n>, shifts <a,b,c>, keyword <word>,");
    println!("  pattern <a,b,c>, swap, reset, json, ':<n>' to adopt a brute");
    println!("  force candidate, exit. Anything else becomes the input text.\n");

    println!(
        "Mode: {} | Direction: {}",
        session.selected.label().cyan(),
        direction_label(session.direction).cyan()
    );
    match session.selected {
        ModeSelect::Caesar => println!("Shift: {}", session.shift),
        ModeSelect::BruteForce => {}
        ModeSelect::MultiShift => println!("Word shifts: {:?}", session.shifts),
        ModeSelect::Keyword => println!("Keyword: {}", session.keyword),
        ModeSelect::Pattern => println!("Pattern: {:?}", session.pattern),
    }

    let (input_label, output_label) = match session.direction {
        Direction::Encrypt => ("Plain Text", "Encrypted Text"),
        Direction::Decrypt => ("Encrypted Text", "Decrypted Text"),
    };
    println!("\n{}: [{}]", input_label, session.input);

    match view {
        View::Blank => println!("{}: {}", output_label, "(empty)".dark_grey()),
        View::Text(text) => println!("{}: {}", output_label, text.as_str().green()),
        View::Guidance(message) => println!("{}: {}", output_label, (*message).yellow()),
        View::Candidates(candidates) => {
            println!("{} (select with :n):", "Brute force candidates".bold());
            for candidate in candidates {
                println!("  :{:<2} {}", candidate.shift, candidate.result);
            }
        }
    }

    if let Some(notice) = &session.notice {
        println!("\n{}", notice.as_str().yellow());
    }

    print!("\n> ");
    out.flush().unwrap();
}

fn direction_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Encrypt => "Encryption",
        Direction::Decrypt => "Decryption",
    }
}

fn dump_json(view: &View) {
    let payload = match view {
        View::Text(text) => serde_json::json!({ "result": text }),
        View::Candidates(candidates) => serde_json::json!(candidates),
        View::Blank | View::Guidance(_) => serde_json::json!(null),
    };
    println!("{}", serde_json::to_string_pretty(&payload).unwrap());
    println!("[press Enter to continue]");
    let mut pause = String::new();
    let _ = stdin().read_line(&mut pause);
}
