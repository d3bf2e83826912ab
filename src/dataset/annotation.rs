use crate::common::*;

/// Number of whitespace-delimited fields per annotation row.
const NUM_FIELDS: usize = 8;

/// One row of the annotation file.
///
/// The trailing six fields carry bounding-box or metadata values consumed
/// by other users of the format; this adapter retains them verbatim and
/// otherwise ignores them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotationRecord {
    pub file_name: PathBuf,
    pub logo: String,
    pub aux: [String; 6],
}

/// Parse the annotation file: plain text, whitespace-delimited, no header,
/// exactly 8 fields per row. Row order is preserved and defines the
/// dataset's index space.
///
/// Rows with any other field count fail the parse, blank lines included.
pub fn load_annotation_file(path: impl AsRef<Path>) -> Result<Vec<AnnotationRecord>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::ReadAnnotations {
        path: path.to_owned(),
        source,
    })?;

    let records: Vec<_> = text
        .lines()
        .enumerate()
        .map(|(index, line)| {
            let fields: Vec<_> = line.split_whitespace().collect();
            if fields.len() != NUM_FIELDS {
                return Err(Error::MalformedAnnotation {
                    path: path.to_owned(),
                    line: index + 1,
                    found: fields.len(),
                });
            }

            Ok(AnnotationRecord {
                file_name: PathBuf::from(fields[0]),
                logo: fields[1].to_owned(),
                aux: std::array::from_fn(|nth| fields[nth + 2].to_owned()),
            })
        })
        .try_collect()?;

    Ok(records)
}

/// Collect the distinct labels in first-seen order. A label's position in
/// the set is its dense integer class index.
pub fn build_label_index(records: &[AnnotationRecord]) -> IndexSet<String> {
    records
        .iter()
        .map(|record| record.logo.clone())
        .collect()
}
