use anyhow::Result;

fn main() -> Result<()> {
    sms_backup::cli::run()
}
