use std::io::Write;

use serde::Serialize;
use web3inbox::Account;

use crate::error::CliError;

/// JSON form of a built inbox URL.
#[derive(Debug, Serialize)]
pub struct UrlOutput<'a> {
    pub account: String,
    pub url: &'a str,
    pub query: Vec<(String, String)>,
}

/// Write `url` for `account` to the writer, as a bare line or as JSON.
pub fn write_url<W: Write>(
    account: &Account,
    url: &url::Url,
    json_mode: bool,
    writer: &mut W,
) -> Result<(), CliError> {
    if json_mode {
        let output = UrlOutput {
            account: account.to_string(),
            url: url.as_str(),
            query: url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        };
        serde_json::to_writer(&mut *writer, &output)?;
        writer.write_all(b"\n")?;
    } else {
        writeln!(writer, "{url}")?;
    }
    writer.flush()?;
    Ok(())
}
