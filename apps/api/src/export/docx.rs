//! WordprocessingML (.docx) writer.
//!
//! The résumé is first laid out as a flat list of `DocParagraph`s, then
//! serialized to `word/document.xml` and zipped with the package parts.
//! Zip entries carry a fixed timestamp so identical input yields identical bytes.

use std::io::{Cursor, Write};

use anyhow::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::export::pdf::PageSetup;
use crate::models::document::ResumeData;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/></Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:rPr><w:rFonts w:ascii="Arial" w:hAnsi="Arial"/><w:sz w:val="22"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:pPr><w:outlineLvl w:val="0"/></w:pPr><w:rPr><w:b/><w:color w:val="2D3748"/><w:sz w:val="36"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:pPr><w:outlineLvl w:val="1"/></w:pPr><w:rPr><w:b/><w:color w:val="4A5568"/><w:sz w:val="28"/></w:rPr></w:style></w:styles>"#;

/// Spacing after a paragraph, in twentieths of a point.
const SPACE_HEADING: u32 = 200;
const SPACE_ITEM: u32 = 100;
const SPACE_SECTION_END: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    Heading1,
    Heading2,
}

impl ParagraphStyle {
    fn style_id(self) -> &'static str {
        match self {
            ParagraphStyle::Heading1 => "Heading1",
            ParagraphStyle::Heading2 => "Heading2",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocParagraph {
    pub style: Option<ParagraphStyle>,
    pub text: String,
    pub spacing_after: u32,
}

impl DocParagraph {
    fn heading(style: ParagraphStyle, text: impl Into<String>) -> Self {
        Self {
            style: Some(style),
            text: text.into(),
            spacing_after: SPACE_HEADING,
        }
    }

    fn body(text: impl Into<String>, spacing_after: u32) -> Self {
        Self {
            style: None,
            text: text.into(),
            spacing_after,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordDocument {
    pub paragraphs: Vec<DocParagraph>,
    pub page: PageSetup,
}

impl WordDocument {
    pub fn from_resume(data: &ResumeData) -> Self {
        let p = &data.personal_info;
        let mut paragraphs = vec![
            DocParagraph::heading(ParagraphStyle::Heading1, p.name.clone()),
            DocParagraph::body(data.contact_line(), SPACE_HEADING),
            DocParagraph::heading(ParagraphStyle::Heading2, "Professional Summary"),
            DocParagraph::body(p.summary.clone(), SPACE_SECTION_END),
            DocParagraph::heading(ParagraphStyle::Heading2, "Professional Experience"),
        ];

        for exp in &data.experience {
            paragraphs.push(DocParagraph::body(
                format!("{} - {}", exp.title, exp.company),
                SPACE_ITEM,
            ));
            paragraphs.push(DocParagraph::body(
                format!("{} | {} - {}", exp.location, exp.start_date, exp.end_date),
                SPACE_ITEM,
            ));
            paragraphs.extend(
                exp.description
                    .iter()
                    .map(|desc| DocParagraph::body(format!("• {desc}"), SPACE_ITEM)),
            );
        }

        paragraphs.push(DocParagraph::heading(ParagraphStyle::Heading2, "Education"));
        for edu in &data.education {
            let mut line = format!("{} - {}, {}", edu.degree, edu.school, edu.location);
            if let Some(gpa) = edu.gpa() {
                line.push_str(&format!(" | GPA: {gpa}"));
            }
            paragraphs.push(DocParagraph::body(line, SPACE_ITEM));
        }

        paragraphs.push(DocParagraph::heading(ParagraphStyle::Heading2, "Skills"));
        paragraphs.push(DocParagraph::body(data.skills.join(" • "), SPACE_ITEM));

        Self {
            paragraphs,
            page: PageSetup::default(),
        }
    }

    /// Body paragraphs between the given Heading2 and the next heading.
    pub fn section(&self, heading: &str) -> Vec<&str> {
        self.paragraphs
            .iter()
            .skip_while(|p| !(p.style == Some(ParagraphStyle::Heading2) && p.text == heading))
            .skip(1)
            .take_while(|p| p.style.is_none())
            .map(|p| p.text.as_str())
            .collect()
    }

    /// Serializes `word/document.xml`.
    pub fn document_xml(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        writer.write_event(Event::Start(
            BytesStart::new("w:document").with_attributes([("xmlns:w", W_NS)]),
        ))?;
        writer.write_event(Event::Start(BytesStart::new("w:body")))?;

        for paragraph in &self.paragraphs {
            write_paragraph(&mut writer, paragraph)?;
        }
        write_section_properties(&mut writer, &self.page)?;

        writer.write_event(Event::End(BytesEnd::new("w:body")))?;
        writer.write_event(Event::End(BytesEnd::new("w:document")))?;
        Ok(writer.into_inner().into_inner())
    }

    /// Packages the document as a complete .docx archive.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let document = self.document_xml()?;
        let parts: [(&str, &[u8]); 5] = [
            ("[Content_Types].xml", CONTENT_TYPES_XML.as_bytes()),
            ("_rels/.rels", ROOT_RELS_XML.as_bytes()),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML.as_bytes()),
            ("word/styles.xml", STYLES_XML.as_bytes()),
            ("word/document.xml", &document),
        ];

        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, body) in parts {
            zip.start_file(name, options)?;
            zip.write_all(body)?;
        }
        Ok(zip.finish()?.into_inner())
    }
}

fn write_paragraph<W: Write>(writer: &mut Writer<W>, paragraph: &DocParagraph) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("w:p")))?;

    writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;
    if let Some(style) = paragraph.style {
        writer.write_event(Event::Empty(
            BytesStart::new("w:pStyle").with_attributes([("w:val", style.style_id())]),
        ))?;
    }
    let after = paragraph.spacing_after.to_string();
    writer.write_event(Event::Empty(
        BytesStart::new("w:spacing").with_attributes([("w:after", after.as_str())]),
    ))?;
    writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;

    if !paragraph.text.is_empty() {
        writer.write_event(Event::Start(BytesStart::new("w:r")))?;
        writer.write_event(Event::Start(
            BytesStart::new("w:t").with_attributes([("xml:space", "preserve")]),
        ))?;
        writer.write_event(Event::Text(BytesText::new(&paragraph.text)))?;
        writer.write_event(Event::End(BytesEnd::new("w:t")))?;
        writer.write_event(Event::End(BytesEnd::new("w:r")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("w:p")))?;
    Ok(())
}

fn write_section_properties<W: Write>(writer: &mut Writer<W>, page: &PageSetup) -> Result<()> {
    let width = page.width_twips().to_string();
    let height = page.height_twips().to_string();
    let margin = page.margin_twips().to_string();

    writer.write_event(Event::Start(BytesStart::new("w:sectPr")))?;
    writer.write_event(Event::Empty(
        BytesStart::new("w:pgSz").with_attributes([("w:w", width.as_str()), ("w:h", height.as_str())]),
    ))?;
    writer.write_event(Event::Empty(BytesStart::new("w:pgMar").with_attributes([
        ("w:top", margin.as_str()),
        ("w:right", margin.as_str()),
        ("w:bottom", margin.as_str()),
        ("w:left", margin.as_str()),
        ("w:header", "720"),
        ("w:footer", "720"),
        ("w:gutter", "0"),
    ])))?;
    writer.write_event(Event::End(BytesEnd::new("w:sectPr")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::{EducationEntry, ExperienceEntry, PersonalInfo};

    fn sample() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                name: "Barbara Liskov".to_string(),
                email: "bl@example.com".to_string(),
                phone: "555-0199".to_string(),
                location: "Cambridge".to_string(),
                summary: "Systems & languages researcher".to_string(),
            },
            experience: vec![ExperienceEntry {
                title: "Professor".to_string(),
                company: "MIT".to_string(),
                location: "Cambridge".to_string(),
                start_date: "1972".to_string(),
                end_date: "Present".to_string(),
                description: vec!["Designed CLU".to_string(), "Led Argus".to_string()],
            }],
            education: vec![
                EducationEntry {
                    degree: "PhD".to_string(),
                    school: "Stanford".to_string(),
                    location: "Stanford".to_string(),
                    graduation_date: "1968".to_string(),
                    gpa: None,
                },
                EducationEntry {
                    degree: "BA".to_string(),
                    school: "UC Berkeley".to_string(),
                    location: "Berkeley".to_string(),
                    graduation_date: "1961".to_string(),
                    gpa: Some("3.9".to_string()),
                },
            ],
            skills: vec!["Abstraction".to_string(), "Distributed systems".to_string()],
        }
    }

    #[test]
    fn test_layout_follows_section_order() {
        let doc = WordDocument::from_resume(&sample());
        assert_eq!(doc.paragraphs[0].style, Some(ParagraphStyle::Heading1));
        assert_eq!(doc.paragraphs[0].text, "Barbara Liskov");
        assert_eq!(doc.paragraphs[1].text, "bl@example.com | 555-0199 | Cambridge");
        assert_eq!(
            doc.section("Professional Summary"),
            vec!["Systems & languages researcher"]
        );
        assert_eq!(
            doc.section("Professional Experience"),
            vec![
                "Professor - MIT",
                "Cambridge | 1972 - Present",
                "• Designed CLU",
                "• Led Argus"
            ]
        );
        assert_eq!(
            doc.section("Education"),
            vec![
                "PhD - Stanford, Stanford",
                "BA - UC Berkeley, Berkeley | GPA: 3.9"
            ]
        );
        assert_eq!(doc.section("Skills"), vec!["Abstraction • Distributed systems"]);
    }

    #[test]
    fn test_empty_skills_yield_empty_paragraph() {
        let mut data = sample();
        data.skills.clear();
        data.experience.clear();
        let doc = WordDocument::from_resume(&data);
        assert_eq!(doc.section("Skills"), vec![""]);
        assert!(doc.section("Professional Experience").is_empty());
        assert!(doc.to_bytes().is_ok());
    }

    #[test]
    fn test_document_xml_escapes_and_styles() {
        let xml = String::from_utf8(WordDocument::from_resume(&sample()).document_xml().unwrap())
            .unwrap();
        assert!(xml.contains(r#"<w:pStyle w:val="Heading1"/>"#));
        assert!(xml.contains("Systems &amp; languages researcher"));
        assert!(xml.contains(r#"<w:pgSz w:w="12240" w:h="15840"/>"#));
        assert!(xml.contains(r#"w:top="1134""#));
    }

    #[test]
    fn test_package_is_a_zip_and_deterministic() {
        let doc = WordDocument::from_resume(&sample());
        let first = doc.to_bytes().unwrap();
        let second = doc.to_bytes().unwrap();
        assert_eq!(&first[..2], b"PK");
        assert_eq!(first, second);
    }

    #[test]
    fn test_blank_gpa_prints_no_suffix() {
        let mut data = sample();
        data.education[1].gpa = Some("  ".to_string());
        let doc = WordDocument::from_resume(&data);
        assert_eq!(doc.section("Education")[1], "BA - UC Berkeley, Berkeley");
    }
}
