use log::{debug, trace};

use crate::code_table::CodeTable;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::merge_log::{MergeLog, MERGE_COUNT};
use crate::min_heap::MinHeap;

/// The 256-entry forest a tree is grown in.
type Slots = Vec<Option<HuffNode>>;

/// A full Huffman tree over all 256 byte values, together with the merge
/// log that reproduces it.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    root: HuffNode,
    rows: MergeLog,
}

impl HuffmanTree {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        HuffmanTree::from_frequencies(&FrequencyTable::from(bytes))
    }

    /// Performs the 255 greedy merges over a fresh forest.
    ///
    /// Each step joins the two lightest roots, lightest first and lower slot
    /// index first among equal weights. The merged node takes the lower of
    /// the two slots and the higher slot is emptied. Keys in the heap are
    /// `(weight, slot)`, which orders exactly like an ascending slot scan.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Self> {
        let mut slots = fresh_forest(frequencies);
        let keys: Vec<(u64, u8)> = (0..=255u8)
            .map(|slot| (frequencies[slot], slot))
            .collect();
        let mut heap = MinHeap::build(keys)?;
        let mut pairs = Vec::with_capacity(MERGE_COUNT);

        for step in 0..MERGE_COUNT {
            let (lowest_weight, lowest) = heap.extract_min()?;
            let (second_weight, second_lowest) = heap.extract_min()?;

            let left = lowest.min(second_lowest);
            let right = lowest.max(second_lowest);
            trace!(
                "merge {}: slot {} ({}) + slot {} ({})",
                step,
                left,
                slots_weight(&slots, left),
                right,
                slots_weight(&slots, right)
            );

            merge_slots(&mut slots, left, right, step)?;
            heap.insert((lowest_weight + second_weight, left));
            pairs.push((left, right));
        }

        let root = find_root(slots)?;
        debug!(
            "built tree from {} bytes ({} distinct values)",
            frequencies.total(),
            frequencies.distinct()
        );
        Ok(HuffmanTree {
            root,
            rows: MergeLog::from_pairs(&pairs),
        })
    }

    /// Replays a merge log against a fresh forest.
    ///
    /// Fails if any pair names the same slot twice or a slot that an
    /// earlier pair already emptied.
    pub fn from_rows(rows: &MergeLog) -> Result<Self> {
        let mut slots = fresh_forest(&FrequencyTable::new());
        for (step, (left, right)) in rows.pairs().enumerate() {
            merge_slots(&mut slots, left, right, step)?;
        }
        let root = find_root(slots)?;
        debug!("rebuilt tree from merge log");
        Ok(HuffmanTree {
            root,
            rows: rows.clone(),
        })
    }

    pub fn root(&self) -> &HuffNode {
        &self.root
    }

    pub fn rows(&self) -> &MergeLog {
        &self.rows
    }

    pub fn generate_table(&self) -> CodeTable {
        CodeTable::from_tree(self)
    }
}

fn fresh_forest(frequencies: &FrequencyTable) -> Slots {
    (0..=255u8)
        .map(|byte| Some(HuffNode::new(byte, frequencies[byte])))
        .collect()
}

fn slots_weight(slots: &Slots, slot: u8) -> u64 {
    slots[slot as usize].as_ref().map_or(0, HuffNode::weight)
}

fn merge_slots(slots: &mut Slots, left: u8, right: u8, step: usize) -> Result<()> {
    if left == right {
        return Err(HuffmanError::malformed(format!(
            "merge {} joins slot {} with itself",
            step, left
        )));
    }
    let empty = |slot: u8| {
        HuffmanError::malformed(format!("merge {} references empty slot {}", step, slot))
    };
    let left_node = slots[left as usize].take().ok_or_else(|| empty(left))?;
    let right_node = slots[right as usize].take().ok_or_else(|| empty(right))?;
    slots[left as usize] = Some(HuffNode::merge(left_node, right_node));
    Ok(())
}

/// Slot 0 holds the root unless slot 0 was consumed as a right child.
fn find_root(slots: Slots) -> Result<HuffNode> {
    slots
        .into_iter()
        .flatten()
        .next()
        .ok_or_else(|| HuffmanError::malformed("no root left after replay"))
}

#[derive(Debug, Clone)]
pub enum HuffNode {
    Leaf {
        weight: u64,
        symbol: u8,
    },
    Internal {
        weight: u64,
        /// Sum of the children's symbols.
        symbol: u32,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn new(symbol: u8, weight: u64) -> Self {
        HuffNode::Leaf { weight, symbol }
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn symbol(&self) -> u32 {
        match self {
            HuffNode::Leaf { symbol, .. } => *symbol as u32,
            HuffNode::Internal { symbol, .. } => *symbol,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// Left child on `false`, right child on `true`; `None` for a leaf.
    pub fn child(&self, bit: bool) -> Option<&HuffNode> {
        match self {
            HuffNode::Leaf { .. } => None,
            HuffNode::Internal { left, right, .. } => Some(if bit { right } else { left }),
        }
    }

    pub fn merge(left: Self, right: Self) -> Self {
        HuffNode::Internal {
            weight: left.weight() + right.weight(),
            symbol: left.symbol() + right.symbol(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}
