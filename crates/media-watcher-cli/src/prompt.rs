use std::io::{self, Write};

/// Yes/no confirmation on stdin. An empty answer picks `default`; anything
/// unrecognized asks again.
pub fn prompt_confirm(prompt: &str, default: Option<bool>) -> io::Result<bool> {
    let hint = match default {
        Some(true) => "(Y/n)",
        Some(false) | None => "(y/N)",
    };

    let mut input = String::new();
    loop {
        print!("{} {}: ", prompt, hint);
        io::stdout().flush()?;

        input.clear();
        io::stdin().read_line(&mut input)?;

        match input.trim() {
            "y" | "Y" => return Ok(true),
            "n" | "N" => return Ok(false),
            "" => {
                if let Some(default) = default {
                    return Ok(default);
                }
            }
            _ => {}
        }
    }
}
