//! # 晶系枚举
//!
//! 七大晶系的封闭枚举，判定逻辑见 `crystal/classify.rs`。

use serde::{Deserialize, Serialize};

/// 晶系
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrystalSystem {
    Triclinic,
    Monoclinic,
    Orthorhombic,
    Tetragonal,
    Rhombohedral,
    Hexagonal,
    Cubic,
}

impl CrystalSystem {
    /// 报告中使用的大写名称
    pub fn name(self) -> &'static str {
        match self {
            CrystalSystem::Triclinic => "TRICLINIC",
            CrystalSystem::Monoclinic => "MONOCLINIC",
            CrystalSystem::Orthorhombic => "ORTHORHOMBIC",
            CrystalSystem::Tetragonal => "TETRAGONAL",
            CrystalSystem::Rhombohedral => "RHOMBOHEDRAL",
            CrystalSystem::Hexagonal => "HEXAGONAL",
            CrystalSystem::Cubic => "CUBIC",
        }
    }
}

impl std::fmt::Display for CrystalSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_unique() {
        let all = [
            CrystalSystem::Triclinic,
            CrystalSystem::Monoclinic,
            CrystalSystem::Orthorhombic,
            CrystalSystem::Tetragonal,
            CrystalSystem::Rhombohedral,
            CrystalSystem::Hexagonal,
            CrystalSystem::Cubic,
        ];
        let mut names: Vec<_> = all.iter().map(|s| s.to_string()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 7);
        assert_eq!(CrystalSystem::Hexagonal.to_string(), "HEXAGONAL");
    }
}
