//! Pasted-list to YAML conversion for in-memoriam person data.
//!
//! A line containing a `;` is read as remembrances:
//!
//! ```text
//! Guild of Greeters forum thread; Myst Online forum thread: Sad news
//! ```
//!
//! Any other line is read as comma-separated memberships, each with an
//! optional date in parentheses:
//!
//! ```text
//! Ubisoft (Nov 2003), Guild of Greeters (Dec 2003), MOULagain
//! ```
//!
//! The output lines are indented to sit under a person's `memberships:` or
//! `remembrances:` key.

/// Convert one pasted line into YAML list lines.
pub fn extract(line: &str) -> Vec<String> {
    if line.contains(';') {
        extract_remembrances(line)
    } else {
        extract_memberships(line)
    }
}

fn extract_remembrances(line: &str) -> Vec<String> {
    line.split(';')
        .map(|remembrance| format!("    - \"{}\"", remembrance.trim()))
        .collect()
}

fn extract_memberships(line: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for site in line.split(',') {
        match site.split_once('(') {
            None => lines.push(format!("    - site: {}", site.trim())),
            Some((name, rest)) => {
                let date = rest.split_once(')').map_or(rest, |(date, _)| date);
                lines.push(format!("    - site: {}", name.trim()));
                lines.push(format!("      date: {}", date.trim()));
            }
        }
    }
    lines
}
