use scsv::{Options, ParsedDocument, Row};
use std::collections::BTreeMap;

fn naive(input: &str) -> ParsedDocument {
    let mut map: BTreeMap<String, Vec<Row>> = BTreeMap::new();
    for line in input.lines() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split(',');
        let key = parts.next().unwrap().to_string();
        map.entry(key).or_default().push(parts.map(str::to_string).collect());
    }
    ParsedDocument::from(map)
}

#[test]
fn flow_free_input_is_plain_key_value_split() -> Result<(), Box<dyn std::error::Error>> {
    let input = "\
# repo,packages
extra,bat,eza
core,linux

aur,zen-browser-bin
extra,zoxide
core,linux-firmware,,intel-ucode
";
    let doc = scsv::parse_str(input, &Options::default())?;
    assert_eq!(doc, naive(input));
    assert_eq!(doc.len(), 3);
    assert_eq!(doc.row_count(), 5);
    Ok(())
}

#[test]
fn crlf_input_matches_lf_input() -> Result<(), Box<dyn std::error::Error>> {
    let lf = "3|extra,bat\n,eza\n\naur,zen\n";
    let crlf = lf.replace('\n', "\r\n");
    assert_eq!(
        scsv::parse_str(lf, &Options::default())?,
        scsv::parse_str(&crlf, &Options::default())?
    );
    Ok(())
}
