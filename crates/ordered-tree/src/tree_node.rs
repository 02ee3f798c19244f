use crate::types::Node;

/// Arena node holding one tree element.
#[derive(Clone, Debug)]
pub struct TreeNode<V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub element: V,
}

impl<V> TreeNode<V> {
    pub fn new(element: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            element,
        }
    }
}

impl<V> Node for TreeNode<V> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}
