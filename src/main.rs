use quant_data_config::logic::run;

/// Any failure ends the process with a non-zero status and the error chain,
/// which names the path that couldn't be resolved or created.
fn main() -> anyhow::Result<()> {
    run()?;

    Ok(())
}
