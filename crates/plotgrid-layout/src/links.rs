// ABOUTME: Disjoint-set forest used to merge shared-axis groups across nesting levels.

#[derive(Debug, Default)]
pub(crate) struct AxisLinks {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl AxisLinks {
    /// Register a new axis, initially linked to nothing
    pub fn add(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(id);
        self.rank.push(0);
        id
    }

    pub fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression
        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    pub fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return;
        }
        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
    }

    /// Link every node in `nodes` together
    pub fn link_all(&mut self, nodes: &[usize]) {
        if let Some((&first, rest)) = nodes.split_first() {
            for &node in rest {
                self.union(first, node);
            }
        }
    }

    /// Number each set 1.., in order of first appearance
    pub fn numbering(&mut self) -> Vec<usize> {
        let mut numbers = vec![0; self.parent.len()];
        let mut by_root = std::collections::HashMap::new();
        for node in 0..self.parent.len() {
            let root = self.find(node);
            let next = by_root.len() + 1;
            numbers[node] = *by_root.entry(root).or_insert(next);
        }
        numbers
    }
}
