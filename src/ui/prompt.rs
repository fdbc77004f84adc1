//! Interactive yes/no confirmation

use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stdin, with a default for empty input
///
/// The prompt capitalizes the default option (`[Y/n]` / `[y/N]`). Accepts
/// `y`, `n`, `yes`, `no` in any case; anything else re-asks. EOF on stdin
/// behaves like the default, so non-interactive runs don't hang.
pub fn ask_yes_no(question: &str, default: bool) -> bool {
  let options = if default { "Y/n" } else { "y/N" };
  let prompt = format!("{question}? [{options}] ");

  let stdin = io::stdin();
  loop {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
      Ok(0) | Err(_) => {
        println!();
        return default;
      }
      Ok(_) => {}
    }

    match line.trim().to_lowercase().as_str() {
      "" => return default,
      "y" | "yes" => return true,
      "n" | "no" => return false,
      _ => continue,
    }
  }
}
