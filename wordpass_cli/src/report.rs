use std::io::Write;

const TITLE: &str = "Password Generator";
const RULE_WIDTH: usize = 50;

/// Writes the single password followed by the numbered list.
pub fn write(out: &mut impl Write, single: &str, list: &[String]) -> std::io::Result<()> {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out)?;

    writeln!(out, "Single password:")?;
    writeln!(out, "  {single}")?;
    writeln!(out)?;

    writeln!(out, "{} example passwords:", list.len())?;
    for (i, password) in list.iter().enumerate() {
        writeln!(out, "  {:2}. {password}", i + 1)?;
    }

    Ok(())
}
