use serde::{Serialize, Deserialize};

/// Stable handle to a slot inside one `Model`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct ParamId(pub u32);

impl ParamId {
    #[inline(always)]
    pub fn index(&self) -> usize { self.0 as usize }

    /// `None` once `idx` no longer fits the 32-bit handle.
    pub fn new(idx: usize) -> Option<Self> {
        u32::try_from(idx).ok().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips() {
        assert_eq!(ParamId::new(7).map(|id| id.index()), Some(7));
        assert_eq!(ParamId::new(u32::MAX as usize), Some(ParamId(u32::MAX)));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_new_refuses_to_truncate() {
        assert_eq!(ParamId::new(u32::MAX as usize + 1), None);
        assert_eq!(ParamId::new(usize::MAX), None);
    }
}
