//! Call-site metadata for annotated log lines.

use std::fmt;
use std::path::Path;

/// Source location of the application call that produced a log line.
///
/// Captured at the macro call site via [`callsite!`], which stands in for
/// the fixed-depth stack walk a runtime with stack inspection would use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    /// Source file as reported by `file!()`.
    pub file: &'static str,
    /// 1-based line number.
    pub line: u32,
    /// Fully qualified path of the enclosing function.
    pub function: &'static str,
}

impl CallSite {
    /// File name without its directory components.
    pub fn base_file(&self) -> &str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}: {} ][{}]", self.base_file(), self.line, self.function)
    }
}

/// Captures the current [`CallSite`]: file, line, and enclosing function.
///
/// The function path comes from naming a zero-sized fn item declared inside
/// the expansion, so it always reflects the function the application called
/// the logging macro from.
#[macro_export]
macro_rules! callsite {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        $crate::callsite::CallSite {
            file: file!(),
            line: line!(),
            function: name.strip_suffix("::f").unwrap_or(name),
        }
    }};
}
