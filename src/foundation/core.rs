use std::fmt;

/// One of the two command engines ("rings") of the GPU.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Programmable 3D pipeline.
    Render,
    /// Fixed-function copy/fill engine.
    Blit,
}

impl Engine {
    /// `true` for [`Engine::Blit`].
    pub fn is_blit(self) -> bool {
        self == Self::Blit
    }

    /// Map a "prefer blit" answer onto an engine.
    pub fn from_prefer_blit(prefer_blit: bool) -> Self {
        if prefer_blit { Self::Blit } else { Self::Render }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Render => "render",
            Self::Blit => "blit",
        })
    }
}

/// Memory layout of a buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tiling {
    /// Linear layout.
    #[default]
    None,
    /// X-major tiles.
    X,
    /// Y-major tiles.
    Y,
}

impl Tiling {
    /// `true` for [`Tiling::None`].
    pub fn is_linear(self) -> bool {
        self == Self::None
    }
}
