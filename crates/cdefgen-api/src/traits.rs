use crate::errors::GenResult;
use std::path::Path;

/// The external C-to-Zig translator
///
/// The generator treats translation as an opaque, synchronous function from
/// a header on disk to raw declaration text. It never retries a failed call.
///
/// Closures with the matching signature implement the trait, which keeps
/// tests free of real processes:
///
/// ```rust
/// use cdefgen_api::{GenResult, Translator};
/// use std::path::Path;
///
/// let stub = |_header: &Path, _include: &Path| -> GenResult<String> {
///     Ok("pub const t_pd = struct__pd;".to_string())
/// };
/// assert!(stub.translate(Path::new("m_pd.h"), Path::new("/usr/include")).is_ok());
/// ```
pub trait Translator {
    /// Translate `header`, resolving system includes from `include_dir`
    fn translate(&self, header: &Path, include_dir: &Path) -> GenResult<String>;
}

impl<F> Translator for F
where
    F: Fn(&Path, &Path) -> GenResult<String>,
{
    fn translate(&self, header: &Path, include_dir: &Path) -> GenResult<String> {
        self(header, include_dir)
    }
}
