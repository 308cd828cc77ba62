use super::types::ContainerFrame;

/// The containers enclosing the line currently being built.
#[derive(Debug, Default, Clone)]
pub struct ContainerPath(Vec<ContainerFrame>);

impl ContainerPath {
    pub fn set_blockquote_depth(&mut self, depth: u8) {
        self.0
            .retain(|f| !matches!(f, ContainerFrame::BlockQuote { .. }));
        if depth > 0 {
            self.0.push(ContainerFrame::BlockQuote { depth });
        }
    }

    pub fn frames(&self) -> Vec<ContainerFrame> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_zero_clears_quotes() {
        let mut path = ContainerPath::default();
        path.set_blockquote_depth(2);
        assert_eq!(path.frames(), vec![ContainerFrame::BlockQuote { depth: 2 }]);
        path.set_blockquote_depth(0);
        assert!(path.frames().is_empty());
    }
}
