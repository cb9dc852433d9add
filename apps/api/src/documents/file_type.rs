use std::fmt;

/// Resume formats the extractor accepts. Detected from the declared filename only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Pdf,
    Docx,
    Doc,
    Txt,
}

impl FileType {
    pub const ALL: [FileType; 4] = [FileType::Pdf, FileType::Docx, FileType::Doc, FileType::Txt];

    /// Case-sensitive suffix match. `report.PDF` is not a PDF here.
    pub fn from_filename(filename: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|file_type| filename.ends_with(file_type.suffix()))
    }

    pub fn suffix(self) -> &'static str {
        match self {
            FileType::Pdf => ".pdf",
            FileType::Docx => ".docx",
            FileType::Doc => ".doc",
            FileType::Txt => ".txt",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.suffix()[1..])
    }
}
