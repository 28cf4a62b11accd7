//! Flat and tree renderings, and the `std::error::Error` implementation

use super::types::{Data, Diagnostic, Repr};
use std::error::Error;
use std::fmt;

/// Connector drawn in front of every inner layer of the tree rendering
const BRANCH: &str = "┗━ ";
/// Indentation added per nesting level of the tree rendering
const INDENT: &str = "    ";

impl Diagnostic {
    /// Flat, lossy one-line rendering
    ///
    /// Message layers are joined with `": "` down to the terminal layer. A
    /// wrapped external failure contributes only its own text. No data is
    /// shown.
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }

    /// Indented rendering of every layer together with its data
    #[must_use]
    pub fn user_facing(&self) -> String {
        self.user_facing_from(1)
    }

    /// Tree rendering whose first inner layer is indented `start_depth` levels
    #[must_use]
    pub fn user_facing_from(&self, start_depth: usize) -> String {
        UserFacing {
            diagnostic: self,
            depth: start_depth,
        }
        .to_string()
    }
}

struct UserFacing<'a> {
    diagnostic: &'a Diagnostic,
    depth: usize,
}

impl fmt::Display for UserFacing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (offset, layer) in self.diagnostic.layers().enumerate() {
            match &layer.repr {
                Repr::Empty => {}
                Repr::Leaf { message, data } => write!(f, "{message}{}", DataRepr(data))?,
                Repr::Wrapped { external, data } => write!(f, "{external}{}", DataRepr(data))?,
                Repr::Layered { message, data, .. } => write!(
                    f,
                    "{message}{}\n{}{BRANCH}",
                    DataRepr(data),
                    INDENT.repeat(self.depth + offset)
                )?,
            }
        }
        Ok(())
    }
}

/// `": k1 = v1, k2 = v2"` in key order, nothing for an empty map
struct DataRepr<'a>(&'a Data);

impl fmt::Display for DataRepr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            let separator = if i == 0 { ": " } else { ", " };
            write!(f, "{separator}{key} = {value}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Diagnostic {
    /// `{}` is the flat rendering, `{:#}` the tree rendering
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return write!(f, "{}", UserFacing {
                diagnostic: self,
                depth: 1,
            });
        }

        for layer in self.layers() {
            match &layer.repr {
                Repr::Empty => {}
                Repr::Leaf { message, .. } => f.write_str(message)?,
                Repr::Wrapped { external, .. } => write!(f, "{external}")?,
                Repr::Layered { message, .. } => write!(f, "{message}: ")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Diagnostic {
    /// Layers are listed flat, outermost first
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.layers().map(LayerDebug)).finish()
    }
}

struct LayerDebug<'a>(&'a Diagnostic);

impl fmt::Debug for LayerDebug<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.repr {
            Repr::Empty => f.write_str("Empty"),
            Repr::Leaf { message, data } => f
                .debug_struct("Leaf")
                .field("message", message)
                .field("data", data)
                .finish(),
            Repr::Wrapped { external, data } => f
                .debug_struct("Wrapped")
                .field("external", external)
                .field("data", data)
                .finish(),
            Repr::Layered { message, data, .. } => f
                .debug_struct("Layered")
                .field("message", message)
                .field("data", data)
                .finish(),
        }
    }
}

impl Error for Diagnostic {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.repr {
            Repr::Layered { inner, .. } => Some(&**inner),
            Repr::Wrapped { external, .. } => Some(&**external),
            Repr::Leaf { .. } | Repr::Empty => None,
        }
    }
}
