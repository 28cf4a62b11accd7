//! Layering and data attachment

use super::types::{Data, Diagnostic, Repr};
use crate::value::Value;

impl Diagnostic {
    /// Add a context message around this diagnostic
    ///
    /// The result is always a failure, even when wrapping [`Diagnostic::none`].
    #[must_use]
    pub fn wrap<S: Into<String>>(self, message: S) -> Self {
        Self {
            repr: Repr::Layered {
                message: message.into(),
                data: Data::new(),
                inner: Box::new(self),
            },
        }
    }

    /// Set `key` on this layer's data, overwriting an existing entry
    ///
    /// Inner layers are never touched. On the absent failure this yields a
    /// failure with an empty message carrying the entry.
    #[must_use]
    pub fn with_data<K, V>(self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.update_data(|data| {
            data.insert(key.into(), value.into());
        })
    }

    /// Merge `entries` into this layer's data, the new entries winning
    #[must_use]
    pub fn with_all_data<I, K, V>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.update_data(|data| {
            data.extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        })
    }

    fn update_data<F: FnOnce(&mut Data)>(mut self, update: F) -> Self {
        if let Some(data) = self.layer_data_mut() {
            update(data);
            return self;
        }
        let mut data = Data::new();
        update(&mut data);
        Self {
            repr: Repr::Leaf {
                message: String::new(),
                data,
            },
        }
    }

    fn layer_data_mut(&mut self) -> Option<&mut Data> {
        match &mut self.repr {
            Repr::Empty => None,
            Repr::Leaf { data, .. } | Repr::Wrapped { data, .. } | Repr::Layered { data, .. } => {
                Some(data)
            }
        }
    }
}
