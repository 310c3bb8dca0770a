//! Routes command - prints the route table

use std::io::{self, Write};

use crate::api::ROUTES;

/// Print the route table to stdout
pub fn run() -> anyhow::Result<()> {
    let stdout = io::stdout();
    write_routes(&mut stdout.lock())?;
    Ok(())
}

fn write_routes(out: &mut impl Write) -> io::Result<()> {
    let width = ROUTES.iter().map(|(_, path, _)| path.len()).max().unwrap_or(0);

    for (method, path, description) in ROUTES {
        writeln!(out, "{:<7} {:<width$}  {}", method, path, description, width = width)?;
    }

    writeln!(out)?;
    writeln!(out, "Resource routes are also served under /api")?;

    Ok(())
}
