//! Synthetic workbook packages for integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const RELS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
pub const OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
pub const WORKSHEET: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";
pub const SHARED_STRINGS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings";

/// Builder for a minimal but well-formed workbook package.
pub struct XlsxBuilder {
    sheets: Vec<(u32, String, String)>,
    shared_strings: Option<Vec<String>>,
    extra: Vec<(String, String)>,
    skip: Vec<String>,
}

impl XlsxBuilder {
    pub fn new() -> Self {
        Self {
            sheets: Vec::new(),
            shared_strings: None,
            extra: Vec::new(),
            skip: Vec::new(),
        }
    }

    /// Add a sheet with the given id, name and `<sheetData>` body.
    pub fn sheet(mut self, id: u32, name: &str, dimension: &str, rows: &str) -> Self {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <dimension ref="{}"/>
  <sheetData>{}</sheetData>
</worksheet>"#,
            dimension, rows
        );
        self.sheets.push((id, name.to_string(), xml));
        self
    }

    pub fn shared_strings(mut self, strings: &[&str]) -> Self {
        self.shared_strings = Some(strings.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Leave a part out of the package.
    pub fn without(mut self, path: &str) -> Self {
        self.skip.push(path.to_string());
        self
    }

    /// Add or replace a raw part.
    pub fn part(mut self, path: &str, xml: &str) -> Self {
        self.extra.push((path.to_string(), xml.to_string()));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut parts: Vec<(String, String)> = Vec::new();

        parts.push((
            "_rels/.rels".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{RELS_NS}">
  <Relationship Id="rId1" Type="{OFFICE_DOCUMENT}" Target="xl/workbook.xml"/>
</Relationships>"#
            ),
        ));

        let sheet_list: String = self
            .sheets
            .iter()
            .enumerate()
            .map(|(i, (id, name, _))| {
                format!(r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#, name, id, i + 1)
            })
            .collect();
        parts.push((
            "xl/workbook.xml".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"
  xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets>{}</sheets>
</workbook>"#,
                sheet_list
            ),
        ));

        let mut rels: String = self
            .sheets
            .iter()
            .enumerate()
            .map(|(i, _)| {
                format!(
                    r#"<Relationship Id="rId{}" Type="{}" Target="worksheets/sheet{}.xml"/>"#,
                    i + 1,
                    WORKSHEET,
                    i + 1
                )
            })
            .collect();
        if self.shared_strings.is_some() {
            rels.push_str(&format!(
                r#"<Relationship Id="rIdSst" Type="{}" Target="sharedStrings.xml"/>"#,
                SHARED_STRINGS
            ));
        }
        parts.push((
            "xl/_rels/workbook.xml.rels".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{}">{}</Relationships>"#,
                RELS_NS, rels
            ),
        ));

        for (i, (_, _, xml)) in self.sheets.iter().enumerate() {
            parts.push((format!("xl/worksheets/sheet{}.xml", i + 1), xml.clone()));
        }

        if let Some(strings) = &self.shared_strings {
            let items: String = strings
                .iter()
                .map(|s| format!(r#"<si><t xml:space="preserve">{}</t></si>"#, s))
                .collect();
            parts.push((
                "xl/sharedStrings.xml".to_string(),
                format!(
                    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">{}</sst>"#,
                    items
                ),
            ));
        }

        for (path, xml) in self.extra {
            parts.retain(|(p, _)| *p != path);
            parts.push((path, xml));
        }

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        for (path, xml) in parts {
            if self.skip.contains(&path) {
                continue;
            }
            zip.start_file(path, options).unwrap();
            zip.write_all(xml.as_bytes()).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }
}

/// Two sheets, "Sheet1" (id 1) and "Data" (id 2), with shared strings.
pub fn two_sheet_workbook() -> Vec<u8> {
    XlsxBuilder::new()
        .shared_strings(&["Name", "Score", "alice", "bob"])
        .sheet(
            1,
            "Sheet1",
            "A1:B3",
            r#"<row r="1"><c r="A1" t="s"><v>0</v></c><c r="B1" t="s"><v>1</v></c></row>
               <row r="2"><c r="A2" t="s"><v>2</v></c><c r="B2"><v>91</v></c></row>
               <row r="3"><c r="A3" t="s"><v>3</v></c><c r="B3"><v>78.5</v></c></row>"#,
        )
        .sheet(
            2,
            "Data",
            "C5",
            r#"<row r="1"><c r="A1" t="b"><v>1</v></c></row>
               <row r="4"><c r="C4"><v>45292</v></c></row>
               <row r="5" s="2" customFormat="1"><c r="A5" s="2"/></row>"#,
        )
        .build()
}
