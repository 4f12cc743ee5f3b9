use bindscan_core::BatchReport;

/// Handle `bindscan schema`.
pub fn handle() -> anyhow::Result<()> {
    let schema = schemars::schema_for!(BatchReport);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
