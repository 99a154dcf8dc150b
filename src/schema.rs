// Static schema declarations for option nodes

use crate::error::{OptionError, OptionResult};

/// The category of values a slot accepts. Coercion is dispatched on this.
#[derive(Debug, Clone, Copy)]
pub enum SlotKind {
    Bool,
    Number,
    Integer { min: Option<i64> },
    Float { min: f64, max: f64 },
    Text,
    /// Opaque JavaScript callback source, passed through verbatim.
    Callback,
    Enum {
        allowed: &'static [&'static str],
        fold_case: bool,
    },
    NumberOrPercent,
    /// Index or id, e.g. `xAxis: 1` or `xAxis: 'secondary'`.
    NumberOrText,
    Color,
    Node(&'static Schema),
    /// `false`/`true` or a nested node (e.g. `animation`).
    NodeOrBool(&'static Schema),
    /// A single node or a list of nodes; the shape given is kept.
    NodeOrList(&'static Schema),
    NodeList {
        schema: &'static Schema,
        wrap_single: bool,
    },
    /// Series data: nodes, mappings, bare numbers or `[x, y]` pairs.
    DataPoints(&'static Schema),
    Strings,
    /// Two-item position such as `['50%', '50%']`.
    Pair,
    /// Gradient stops: `[[offset, color], ...]`.
    Stops,
    /// Free-form mapping, kept as-is.
    Map,
}

/// One declared attribute of a node.
#[derive(Debug)]
pub struct SlotDef {
    /// Internal (snake_case) attribute name.
    pub name: &'static str,
    /// External (wire-format) key.
    pub key: &'static str,
    /// Historical spellings accepted by `from_dict`.
    pub aliases: &'static [&'static str],
    pub kind: SlotKind,
}

impl SlotDef {
    pub const fn new(name: &'static str, key: &'static str, kind: SlotKind) -> Self {
        Self {
            name,
            key,
            aliases: &[],
            kind,
        }
    }

    pub const fn aliased(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// All spellings that resolve to this slot, in lookup order.
    pub fn spellings(&self) -> impl Iterator<Item = &'static str> {
        let aliases: &'static [&'static str] = self.aliases;
        let name = (self.name != self.key).then_some(self.name);
        std::iter::once(self.key)
            .chain(name)
            .chain(aliases.iter().copied())
    }
}

/// A node type: a name plus the capability groups its slots are drawn from.
///
/// Groups are concatenated in order, so a series schema is declared as the
/// list of capabilities it has (`&[SERIES_BASE, GENERIC_CORE, HAS_MARKER, ..]`)
/// instead of inheriting from a parent type.
#[derive(Debug)]
pub struct Schema {
    pub name: &'static str,
    pub capabilities: &'static [&'static [SlotDef]],
}

impl Schema {
    pub fn slots(&self) -> impl Iterator<Item = &'static SlotDef> {
        let groups: &'static [&'static [SlotDef]] = self.capabilities;
        groups.iter().flat_map(|group| group.iter())
    }

    pub fn len(&self) -> usize {
        self.capabilities.iter().map(|g| g.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position and definition of the slot with internal name `name`.
    pub fn slot(&self, name: &str) -> Option<(usize, &'static SlotDef)> {
        self.slots().enumerate().find(|(_, s)| s.name == name)
    }

    pub fn has_slot(&self, name: &str) -> bool {
        self.slot(name).is_some()
    }

    pub fn key_map(&'static self) -> ExternalKeyMap {
        ExternalKeyMap { schema: self }
    }

    /// Verifies that no spelling (external key, internal name or alias)
    /// resolves to two different slots.
    pub fn check_keys(&self) -> OptionResult<()> {
        let mut seen: Vec<(&'static str, &'static str)> = Vec::with_capacity(self.len() * 2);
        for slot in self.slots() {
            for spelling in slot.spellings() {
                if let Some((_, owner)) = seen.iter().find(|(k, _)| *k == spelling) {
                    return Err(OptionError::SchemaKeyConflict {
                        schema: self.name.to_string(),
                        key: spelling.to_string(),
                        first: owner.to_string(),
                        second: slot.name.to_string(),
                    });
                }
                seen.push((spelling, slot.name));
            }
        }
        Ok(())
    }

    pub(crate) fn qualified(&self, slot: &SlotDef) -> String {
        format!("{}.{}", self.name, slot.name)
    }
}

/// Bidirectional view between internal attribute names and wire keys.
#[derive(Debug, Clone, Copy)]
pub struct ExternalKeyMap {
    schema: &'static Schema,
}

impl ExternalKeyMap {
    pub fn external(&self, name: &str) -> Option<&'static str> {
        self.schema.slot(name).map(|(_, s)| s.key)
    }

    /// Resolves any accepted spelling (key, internal name, alias) to the
    /// internal attribute name.
    pub fn internal(&self, key: &str) -> Option<&'static str> {
        self.schema
            .slots()
            .find(|s| s.spellings().any(|k| k == key))
            .map(|s| s.name)
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.schema.slots().map(|s| (s.name, s.key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static INNER: Schema = Schema {
        name: "Inner",
        capabilities: &[&[SlotDef::new("value", "value", SlotKind::Number)]],
    };

    static BASE: &[SlotDef] = &[
        SlotDef::new("class_name", "className", SlotKind::Text),
        SlotDef::new("label_rank", "labelrank", SlotKind::Number).aliased(&["labelRank"]),
    ];

    static EXTRA: &[SlotDef] = &[SlotDef::new("inner", "inner", SlotKind::Node(&INNER))];

    static COMPOSED: Schema = Schema {
        name: "Composed",
        capabilities: &[BASE, EXTRA],
    };

    static CONFLICTING: Schema = Schema {
        name: "Conflicting",
        capabilities: &[&[
            SlotDef::new("class_name", "className", SlotKind::Text),
            SlotDef::new("css_class", "className", SlotKind::Text),
        ]],
    };

    #[test]
    fn test_capabilities_are_concatenated_in_order() {
        let names: Vec<_> = COMPOSED.slots().map(|s| s.name).collect();
        assert_eq!(names, vec!["class_name", "label_rank", "inner"]);
        assert_eq!(COMPOSED.len(), 3);
        assert_eq!(COMPOSED.slot("inner").map(|(i, _)| i), Some(2));
    }

    #[test]
    fn test_key_map_both_directions() {
        let map = COMPOSED.key_map();
        assert_eq!(map.external("class_name"), Some("className"));
        assert_eq!(map.internal("className"), Some("class_name"));
        assert_eq!(map.internal("class_name"), Some("class_name"));
        assert_eq!(map.internal("labelRank"), Some("label_rank"));
        assert_eq!(map.internal("nope"), None);
    }

    #[test]
    fn test_spellings_skip_duplicate_name() {
        let slot = &EXTRA[0];
        assert_eq!(slot.spellings().collect::<Vec<_>>(), vec!["inner"]);
    }

    #[test]
    fn test_check_keys_detects_conflict() {
        assert!(COMPOSED.check_keys().is_ok());
        match CONFLICTING.check_keys() {
            Err(OptionError::SchemaKeyConflict { key, first, second, .. }) => {
                assert_eq!(key, "className");
                assert_eq!(first, "class_name");
                assert_eq!(second, "css_class");
            }
            other => panic!("Expected SchemaKeyConflict, got {:?}", other),
        }
    }
}
