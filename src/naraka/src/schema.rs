//! Face data schema.
//!
//! Every addressable scalar of the face-data structure, keyed by its
//! slash-delimited path and the position it occupies in the flat array the
//! game exchanges. Indices are contiguous from 0 and paths are unique.

/// A single addressable face-data field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaEntry {
    /// Slash-delimited key sequence (e.g. "ParamData/Eyes/Right")
    pub path: &'static str,
    /// Position in the flat face-data array
    pub index: usize,
}

impl SchemaEntry {
    const fn new(path: &'static str, index: usize) -> Self {
        SchemaEntry { path, index }
    }

    /// Path segments from root to leaf
    pub fn segments(&self) -> std::str::Split<'static, char> {
        self.path.split('/')
    }

    /// Identity fields are never touched by preset transforms
    pub fn is_identity(&self) -> bool {
        IDENTITY_PATHS.contains(&self.path)
    }
}

/// Paths that identify the character rather than shape it
pub const IDENTITY_PATHS: &[&str] = &["HeroID", "Version"];

/// Face data schema in array order
pub const SCHEMA: &[SchemaEntry] = &[
    SchemaEntry::new("HeroID", 0),
    SchemaEntry::new("Version", 1),
    // Overall face shape
    SchemaEntry::new("ParamData/Face/Width", 2),
    SchemaEntry::new("ParamData/Face/Length", 3),
    SchemaEntry::new("ParamData/Face/Fullness", 4),
    SchemaEntry::new("ParamData/Forehead/Height", 5),
    SchemaEntry::new("ParamData/Forehead/Width", 6),
    SchemaEntry::new("ParamData/Forehead/Slope", 7),
    SchemaEntry::new("ParamData/Temple/Width", 8),
    SchemaEntry::new("ParamData/Temple/Depth", 9),
    // Brows
    SchemaEntry::new("ParamData/Eyebrows/Height", 10),
    SchemaEntry::new("ParamData/Eyebrows/Spacing", 11),
    SchemaEntry::new("ParamData/Eyebrows/Angle", 12),
    SchemaEntry::new("ParamData/Eyebrows/Thickness", 13),
    SchemaEntry::new("ParamData/Eyebrows/Style", 14),
    SchemaEntry::new("ParamData/BrowRidge/Height", 15),
    SchemaEntry::new("ParamData/BrowRidge/Depth", 16),
    // Eyes
    SchemaEntry::new("ParamData/Eyes/Left", 17),
    SchemaEntry::new("ParamData/Eyes/Right", 18),
    SchemaEntry::new("ParamData/Eyes/Height", 19),
    SchemaEntry::new("ParamData/Eyes/Spacing", 20),
    SchemaEntry::new("ParamData/Eyes/Size", 21),
    SchemaEntry::new("ParamData/Eyes/Tilt", 22),
    SchemaEntry::new("ParamData/Eyes/Depth", 23),
    SchemaEntry::new("ParamData/Eyelids/Upper", 24),
    SchemaEntry::new("ParamData/Eyelids/Lower", 25),
    SchemaEntry::new("ParamData/Eyelids/Fold", 26),
    SchemaEntry::new("ParamData/Pupils/Size", 27),
    SchemaEntry::new("ParamData/Pupils/Color", 28),
    // Nose
    SchemaEntry::new("ParamData/Nose/Height", 29),
    SchemaEntry::new("ParamData/Nose/Length", 30),
    SchemaEntry::new("ParamData/Nose/Width", 31),
    SchemaEntry::new("ParamData/Nose/Projection", 32),
    SchemaEntry::new("ParamData/NoseBridge/Height", 33),
    SchemaEntry::new("ParamData/NoseBridge/Width", 34),
    SchemaEntry::new("ParamData/NoseTip/Height", 35),
    SchemaEntry::new("ParamData/NoseTip/Width", 36),
    SchemaEntry::new("ParamData/Nostrils/Width", 37),
    SchemaEntry::new("ParamData/Nostrils/Flare", 38),
    // Cheeks
    SchemaEntry::new("ParamData/Cheekbones/Height", 39),
    SchemaEntry::new("ParamData/Cheekbones/Width", 40),
    SchemaEntry::new("ParamData/Cheekbones/Projection", 41),
    SchemaEntry::new("ParamData/Cheeks/Fullness", 42),
    SchemaEntry::new("ParamData/Cheeks/Hollow", 43),
    // Mouth
    SchemaEntry::new("ParamData/Mouth/Height", 44),
    SchemaEntry::new("ParamData/Mouth/Width", 45),
    SchemaEntry::new("ParamData/Mouth/Depth", 46),
    SchemaEntry::new("ParamData/Mouth/Corners", 47),
    SchemaEntry::new("ParamData/Lips/Upper", 48),
    SchemaEntry::new("ParamData/Lips/Lower", 49),
    SchemaEntry::new("ParamData/Lips/Color", 50),
    SchemaEntry::new("ParamData/Philtrum/Depth", 51),
    // Jaw and chin
    SchemaEntry::new("ParamData/Jaw/Width", 52),
    SchemaEntry::new("ParamData/Jaw/Angle", 53),
    SchemaEntry::new("ParamData/Jaw/Height", 54),
    SchemaEntry::new("ParamData/Chin/Height", 55),
    SchemaEntry::new("ParamData/Chin/Width", 56),
    SchemaEntry::new("ParamData/Chin/Projection", 57),
    SchemaEntry::new("ParamData/Chin/Cleft", 58),
    // Ears and neck
    SchemaEntry::new("ParamData/Ears/Size", 59),
    SchemaEntry::new("ParamData/Ears/Angle", 60),
    SchemaEntry::new("ParamData/Ears/Height", 61),
    SchemaEntry::new("ParamData/Neck/Width", 62),
    SchemaEntry::new("ParamData/Neck/AdamsApple", 63),
    // Skin and makeup (ID fields carry values above the slider range)
    SchemaEntry::new("ParamData/Skin/Tone", 64),
    SchemaEntry::new("ParamData/Skin/Texture", 65),
    SchemaEntry::new("ParamData/Skin/Age", 66),
    SchemaEntry::new("ParamData/Makeup/EyeshadowID", 67),
    SchemaEntry::new("ParamData/Makeup/EyeshadowIntensity", 68),
    SchemaEntry::new("ParamData/Makeup/EyelinerID", 69),
    SchemaEntry::new("ParamData/Makeup/BlushID", 70),
    SchemaEntry::new("ParamData/Makeup/BlushIntensity", 71),
    SchemaEntry::new("ParamData/Makeup/LipstickID", 72),
    SchemaEntry::new("ParamData/Makeup/LipstickIntensity", 73),
    SchemaEntry::new("ParamData/Decals/TattooID", 74),
    SchemaEntry::new("ParamData/Decals/TattooOpacity", 75),
    SchemaEntry::new("ParamData/Decals/ScarID", 76),
    SchemaEntry::new("ParamData/Decals/MoleID", 77),
];

/// Number of entries (and length of the flat face-data array)
pub fn len() -> usize {
    SCHEMA.len()
}

/// Look up a schema entry by path
pub fn entry_by_path(path: &str) -> Option<&'static SchemaEntry> {
    SCHEMA.iter().find(|e| e.path == path)
}

/// Look up a schema entry by array index
pub fn entry_by_index(index: usize) -> Option<&'static SchemaEntry> {
    SCHEMA.iter().find(|e| e.index == index)
}

/// Entries the preset transforms operate on (identity fields excluded)
pub fn shape_entries() -> impl Iterator<Item = &'static SchemaEntry> {
    SCHEMA.iter().filter(|e| !e.is_identity())
}
