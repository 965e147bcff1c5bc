#[cfg(test)]
pub mod fixtures {
    use std::io::{Cursor, Write};

    use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

    use crate::{
        models::domain::QuizQuestion,
        services::document_service::{UploadedDocument, PPTX_CONTENT_TYPE},
    };

    pub const PARIS_QUIZ: &str = r#"[{"question":"What is the capital of France?","options":["Paris","Rome","Berlin","Madrid"],"answer":"Paris"}]"#;

    /// A minimal slide deck with one slide per entry in `slides`.
    pub fn slide_deck(slides: &[&str]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (index, text) in slides.iter().enumerate() {
            let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
            writer
                .start_file(format!("ppt/slides/slide{}.xml", index + 1), options)
                .unwrap();
            write!(
                writer,
                r#"<p:sld><p:cSld><p:spTree><p:sp><p:txBody><a:p><a:r><a:t>{text}</a:t></a:r></a:p></p:txBody></p:sp></p:spTree></p:cSld></p:sld>"#
            )
            .unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    /// A single-page PDF showing `text` in Helvetica, with a correct xref
    /// table.
    pub fn pdf_document(text: &str) -> Vec<u8> {
        let content = format!("BT /F1 24 Tf 72 720 Td ({text}) Tj ET");
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>".to_string(),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>".to_string(),
            format!("<< /Length {} >>\nstream\n{content}\nendstream", content.len()),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (index, object) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            write!(pdf, "{} 0 obj\n{object}\nendobj\n", index + 1).unwrap();
        }

        let xref_offset = pdf.len();
        write!(pdf, "xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).unwrap();
        for offset in offsets {
            write!(pdf, "{offset:010} 00000 n \n").unwrap();
        }
        write!(
            pdf,
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%EOF\n",
            objects.len() + 1
        )
        .unwrap();
        pdf
    }

    pub fn paris_upload() -> UploadedDocument {
        UploadedDocument::new(
            PPTX_CONTENT_TYPE,
            slide_deck(&["Paris is the capital of France."]),
        )
    }

    pub fn question(text: &str, answer: &str) -> QuizQuestion {
        QuizQuestion {
            question: text.to_string(),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            answer: answer.to_string(),
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::document_service::{extract_text, DocumentKind};

    #[test]
    fn test_fixtures_slide_deck_round_trips_text() {
        let deck = slide_deck(&["One", "Two"]);
        let text = extract_text(DocumentKind::SlideDeck, &deck).unwrap();
        assert_eq!(text, "One\nTwo");
    }

    #[test]
    fn test_fixtures_question() {
        let q = question("Q?", "B");
        assert!(q.is_well_formed());
    }
}
