//! Workspace-wide default configuration shared by every provider.

use std::fmt;

use crate::provider::ConfigTable;

/// Default configuration merged underneath every provider's own table.
///
/// The defaults may be declared lazily as a zero-argument producer; the
/// first call to [`GlobalDefaults::resolve`] replaces the producer with its
/// output in place, so later providers reuse the already-computed table.
pub enum GlobalDefaults {
    /// Concrete default table.
    Table(ConfigTable),
    /// Producer invoked once, then memoised as a `Table`.
    Producer(Box<dyn Fn() -> ConfigTable>),
}

impl fmt::Debug for GlobalDefaults {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table(table) => formatter.debug_tuple("Table").field(table).finish(),
            Self::Producer(_) => formatter.write_str("Producer(..)"),
        }
    }
}

impl Default for GlobalDefaults {
    fn default() -> Self {
        Self::Table(ConfigTable::new())
    }
}

impl GlobalDefaults {
    /// Builds defaults from a concrete table.
    #[must_use]
    pub fn from_table(table: ConfigTable) -> Self {
        Self::Table(table)
    }

    /// Builds defaults from a zero-argument producer.
    #[must_use]
    pub fn from_producer(producer: impl Fn() -> ConfigTable + 'static) -> Self {
        Self::Producer(Box::new(producer))
    }

    /// Returns the default table, memoising a producer in place.
    pub fn resolve(&mut self) -> &ConfigTable {
        if let Self::Producer(produce) = &*self {
            *self = Self::Table(produce());
        }
        let Self::Table(table) = self else {
            unreachable!("producer was replaced with its output above")
        };
        table
    }
}
