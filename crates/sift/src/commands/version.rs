pub fn run() -> anyhow::Result<()> {
    println!("sift {}", env!("CARGO_PKG_VERSION"));
    println!("TF-IDF question answering over plain-text documents");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_output() {
        let result = run();
        assert!(result.is_ok());
    }
}
