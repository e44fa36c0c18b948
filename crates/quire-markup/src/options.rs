//! Parse configuration.

use strum_macros::{Display, EnumString};

use crate::scanner::entity::{DropEntities, EntityResolver, NamedEntities};

/// Default limit on nested levels.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Which built-in entity strategy the text scanner uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum EntityMode {
    /// Consume the `&` marker and produce nothing. References are dropped,
    /// not decoded.
    #[default]
    Drop,
    /// Decode named and numeric references; unknown ones stay literal.
    Named,
}

impl EntityMode {
    /// The resolver implementing this mode.
    #[must_use]
    pub fn resolver(self) -> &'static dyn EntityResolver {
        match self {
            Self::Drop => &DropEntities,
            Self::Named => &NamedEntities,
        }
    }
}

/// Options for one parse.
///
/// The defaults reproduce the lenient behavior: entities dropped, nameless
/// tags such as `<!-- -->` kept as tags with an empty name, and nothing
/// written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of nested levels below the top level.
    pub max_depth: usize,
    /// Entity strategy used when no custom resolver is supplied.
    pub entities: EntityMode,
    /// Consume `<!…>` and `<?…>` whole instead of building nameless tags.
    pub skip_declarations: bool,
    /// Mirror diagnostics to the shared warning channel. Off by default.
    pub emit_warnings: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            entities: EntityMode::Drop,
            skip_declarations: false,
            emit_warnings: false,
        }
    }
}

impl ParseOptions {
    /// Set the maximum nesting depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Select the built-in entity strategy.
    #[must_use]
    pub const fn with_entities(mut self, entities: EntityMode) -> Self {
        self.entities = entities;
        self
    }

    /// Skip markup declarations and processing instructions.
    #[must_use]
    pub const fn with_skip_declarations(mut self, skip: bool) -> Self {
        self.skip_declarations = skip;
        self
    }

    /// Enable or silence the warning channel.
    #[must_use]
    pub const fn with_warnings(mut self, emit: bool) -> Self {
        self.emit_warnings = emit;
        self
    }
}
