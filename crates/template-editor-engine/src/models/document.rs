use log::debug;

use super::block::BlockKind;
use super::error::{ModelError, ModelResult};
use super::inline::{self, InlineRun};
use super::selection::{Position, Selection};

/// Stable handle of a block inside one [`Document`].
///
/// Ids index the document's arena and are never reused while the document
/// lives, so a handle to a removed block fails with
/// [`ModelError::UnknownBlock`] instead of silently pointing elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(usize);

impl BlockId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One arena slot.
#[derive(Debug, Clone)]
pub struct BlockNode {
    kind: BlockKind,
    parent: Option<BlockId>,
    runs: Vec<InlineRun>,
    children: Vec<BlockId>,
}

impl BlockNode {
    pub fn kind(&self) -> &BlockKind {
        &self.kind
    }

    pub fn parent(&self) -> Option<BlockId> {
        self.parent
    }

    pub fn runs(&self) -> &[InlineRun] {
        &self.runs
    }

    pub fn children(&self) -> &[BlockId] {
        &self.children
    }
}

/// Owned, arena-free view of a block and its descendants.
///
/// Two documents are equal when their trees are equal, regardless of which
/// arena slots their blocks occupy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTree {
    pub kind: BlockKind,
    pub runs: Vec<InlineRun>,
    pub children: Vec<BlockTree>,
}

impl BlockTree {
    pub fn leaf(kind: BlockKind, runs: Vec<InlineRun>) -> Self {
        Self {
            kind,
            runs,
            children: Vec::new(),
        }
    }

    /// A text block holding one unmarked run (or nothing for empty text).
    pub fn text(kind: BlockKind, text: &str) -> Self {
        let runs = if text.is_empty() {
            Vec::new()
        } else {
            vec![InlineRun::plain(text)]
        };
        Self::leaf(kind, runs)
    }

    pub fn container(kind: BlockKind, children: Vec<BlockTree>) -> Self {
        Self {
            kind,
            runs: Vec::new(),
            children,
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<BlockTree>) -> Self {
        self.children = children;
        self
    }
}

/// Which kinds a parent (or the root when `None`) may hold.
fn can_contain(parent: Option<&BlockKind>, child: &BlockKind) -> bool {
    match parent {
        None | Some(BlockKind::BlockQuote) => !matches!(child, BlockKind::ListItem),
        Some(BlockKind::UnorderedList(_)) => matches!(child, BlockKind::ListItem),
        Some(BlockKind::ListItem) => child.is_list(),
        Some(_) => false,
    }
}

/// A tree of blocks stored in an arena.
///
/// The document is one editable buffer. Queries never mutate; every mutation
/// checks its preconditions before touching the arena, so a returned error
/// leaves the document unchanged.
///
/// Slots are never reused, so a [`BlockId`] can never come to name a different
/// block. The arena therefore grows with every block a split or wrap creates
/// and keeps a tombstone for every block removed, for as long as the document
/// lives. `Document::from_tree(doc.to_tree())` yields a compact copy.
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<Option<BlockNode>>,
    roots: Vec<BlockId>,
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.to_tree() == other.to_tree()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a document from owned trees, validating every block on the way in.
    pub fn from_tree(trees: Vec<BlockTree>) -> ModelResult<Self> {
        let mut doc = Self::new();
        for tree in trees {
            doc.push_tree(None, tree)?;
        }
        Ok(doc)
    }

    fn push_tree(&mut self, parent: Option<BlockId>, tree: BlockTree) -> ModelResult<BlockId> {
        let id = self.push_block(parent, tree.kind, tree.runs)?;
        for child in tree.children {
            self.push_tree(Some(id), child)?;
        }
        Ok(id)
    }

    pub fn to_tree(&self) -> Vec<BlockTree> {
        self.roots.iter().filter_map(|id| self.subtree(*id)).collect()
    }

    fn subtree(&self, id: BlockId) -> Option<BlockTree> {
        let node = self.node(id).ok()?;
        Some(BlockTree {
            kind: node.kind.clone(),
            runs: node.runs.clone(),
            children: node
                .children
                .iter()
                .filter_map(|c| self.subtree(*c))
                .collect(),
        })
    }

    // ============ Queries ============

    pub fn roots(&self) -> &[BlockId] {
        &self.roots
    }

    pub fn is_blank(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn block(&self, id: BlockId) -> Option<&BlockNode> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    pub fn kind(&self, id: BlockId) -> ModelResult<&BlockKind> {
        Ok(&self.node(id)?.kind)
    }

    pub fn runs(&self, id: BlockId) -> ModelResult<&[InlineRun]> {
        Ok(&self.node(id)?.runs)
    }

    pub fn children(&self, id: BlockId) -> ModelResult<&[BlockId]> {
        Ok(&self.node(id)?.children)
    }

    pub fn parent_of(&self, id: BlockId) -> ModelResult<Option<BlockId>> {
        Ok(self.node(id)?.parent)
    }

    /// Plain text of a block.
    ///
    /// For text blocks this is the block's own runs (a list item's nested
    /// lists are not included). Containers join their descendants with `\n`.
    pub fn text_of(&self, id: BlockId) -> ModelResult<String> {
        let node = self.node(id)?;
        if node.kind.is_text() {
            return Ok(inline::plain_text(&node.runs));
        }
        let parts = node
            .children
            .iter()
            .map(|c| self.text_of(*c))
            .collect::<ModelResult<Vec<_>>>()?;
        Ok(parts.join("\n"))
    }

    /// Length in characters of a text block's own text.
    pub fn len(&self, id: BlockId) -> ModelResult<usize> {
        Ok(inline::char_len(&self.node(id)?.runs))
    }

    pub fn is_empty(&self, id: BlockId) -> ModelResult<bool> {
        let node = self.node(id)?;
        if node.kind.is_text() {
            return Ok(node.runs.is_empty());
        }
        for child in &node.children {
            if !self.is_empty(*child)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// All text blocks in document order.
    pub fn leaves(&self) -> Vec<BlockId> {
        let mut out = Vec::new();
        for root in &self.roots {
            self.collect_leaves(*root, &mut out);
        }
        out
    }

    fn collect_leaves(&self, id: BlockId, out: &mut Vec<BlockId>) {
        let Ok(node) = self.node(id) else {
            return;
        };
        if node.kind.is_text() {
            out.push(id);
        }
        for child in &node.children {
            self.collect_leaves(*child, out);
        }
    }

    /// The first text block at or below `id`.
    pub fn first_leaf(&self, id: BlockId) -> ModelResult<Option<BlockId>> {
        let node = self.node(id)?;
        if node.kind.is_text() {
            return Ok(Some(id));
        }
        for child in &node.children {
            if let Some(leaf) = self.first_leaf(*child)? {
                return Ok(Some(leaf));
            }
        }
        Ok(None)
    }

    pub fn last_leaf(&self) -> Option<BlockId> {
        self.leaves().last().copied()
    }

    /// Child indices leading from the roots to `id`.
    pub fn path_of(&self, id: BlockId) -> ModelResult<Vec<usize>> {
        let mut path = Vec::new();
        let mut current = id;
        loop {
            let (parent, index) = self.position_in_parent(current)?;
            path.push(index);
            match parent {
                Some(p) => current = p,
                None => break,
            }
        }
        path.reverse();
        Ok(path)
    }

    pub fn block_at_path(&self, path: &[usize]) -> Option<BlockId> {
        let (first, rest) = path.split_first()?;
        let mut current = *self.roots.get(*first)?;
        for index in rest {
            current = *self.block(current)?.children.get(*index)?;
        }
        Some(current)
    }

    /// Verifies every structural invariant of the tree.
    pub fn check_invariants(&self) -> ModelResult<()> {
        let mut reachable = 0;
        for root in &self.roots {
            self.check_node(None, *root, &mut reachable)?;
        }
        let live = self.nodes.iter().filter(|n| n.is_some()).count();
        if reachable != live {
            return Err(ModelError::invalid(
                "arena holds blocks unreachable from the roots",
            ));
        }
        Ok(())
    }

    fn check_node(
        &self,
        parent: Option<BlockId>,
        id: BlockId,
        reachable: &mut usize,
    ) -> ModelResult<()> {
        let node = self.node(id)?;
        *reachable += 1;
        if node.parent != parent {
            return Err(ModelError::invalid("parent link does not match tree position"));
        }
        let parent_kind = parent.map(|p| self.kind(p)).transpose()?;
        if !can_contain(parent_kind, &node.kind) {
            return Err(ModelError::invalid("block kind not allowed under its parent"));
        }
        let runs = &node.runs;
        if (node.kind.is_container() || node.kind == BlockKind::ThematicBreak) && !runs.is_empty()
        {
            return Err(ModelError::invalid("block kind cannot hold text"));
        }
        if matches!(node.kind, BlockKind::CodeBlock { .. }) && runs.iter().any(|r| !r.marks.is_empty())
        {
            return Err(ModelError::invalid("code blocks hold unmarked text"));
        }
        if runs.iter().any(|r| r.text.is_empty()) {
            return Err(ModelError::invalid("inline runs must not be empty"));
        }
        if runs.windows(2).any(|w| w[0].marks == w[1].marks) {
            return Err(ModelError::invalid("adjacent runs share a mark set"));
        }
        for child in &node.children {
            self.check_node(Some(id), *child, reachable)?;
        }
        Ok(())
    }

    // ============ Construction ============

    /// Appends a new block as the last child of `parent` (or of the root).
    pub fn push_block(
        &mut self,
        parent: Option<BlockId>,
        kind: BlockKind,
        mut runs: Vec<InlineRun>,
    ) -> ModelResult<BlockId> {
        let parent_kind = parent.map(|p| self.kind(p)).transpose()?;
        if !can_contain(parent_kind, &kind) {
            return Err(ModelError::invalid("parent cannot hold a block of this kind"));
        }
        inline::normalize(&mut runs);
        if (kind.is_container() || kind == BlockKind::ThematicBreak) && !runs.is_empty() {
            return Err(ModelError::invalid("block kind cannot hold text"));
        }
        if matches!(kind, BlockKind::CodeBlock { .. }) {
            inline::strip_marks(&mut runs);
        }
        let id = self.alloc(kind, runs);
        let end = self.child_list(parent)?.len();
        self.attach(parent, end, id)?;
        Ok(id)
    }

    /// Replaces the runs of a text block, used while a block is still being built.
    pub(crate) fn replace_runs(&mut self, id: BlockId, mut runs: Vec<InlineRun>) -> ModelResult<()> {
        let node = self.node_mut(id)?;
        if !node.kind.is_text() || (node.kind == BlockKind::ThematicBreak && !runs.is_empty()) {
            return Err(ModelError::invalid("block kind cannot hold text"));
        }
        if node.kind.is_raw() {
            inline::strip_marks(&mut runs);
        } else {
            inline::normalize(&mut runs);
        }
        node.runs = runs;
        Ok(())
    }

    // ============ Mutations ============

    /// Changes the kind of a text block.
    ///
    /// List items enter and leave lists only through [`Document::wrap`] and
    /// [`Document::unwrap`]; containers can only swap list markers.
    pub fn set_kind(&mut self, id: BlockId, kind: BlockKind) -> ModelResult<()> {
        let node = self.node(id)?;
        match (&node.kind, &kind) {
            (BlockKind::UnorderedList(_), BlockKind::UnorderedList(_))
            | (BlockKind::BlockQuote, BlockKind::BlockQuote)
            | (BlockKind::ListItem, BlockKind::ListItem) => {}
            (current, new) if current.is_container() || new.is_container() => {
                return Err(ModelError::invalid("only text blocks can change kind"));
            }
            (BlockKind::ListItem, _) => {
                return Err(ModelError::invalid(
                    "a list item must be unwrapped before it changes kind",
                ));
            }
            (_, BlockKind::ListItem) => {
                return Err(ModelError::invalid(
                    "a block must be wrapped in a list to become a list item",
                ));
            }
            (_, BlockKind::ThematicBreak) if !node.runs.is_empty() => {
                return Err(ModelError::invalid("a thematic break cannot hold text"));
            }
            _ => {}
        }
        debug!("set_kind {id:?}: {:?} -> {kind:?}", node.kind);
        let node = self.node_mut(id)?;
        if kind.is_raw() {
            inline::strip_marks(&mut node.runs);
        }
        node.kind = kind;
        Ok(())
    }

    /// Wraps a block in a new `BlockQuote` or `UnorderedList` container.
    ///
    /// A paragraph or heading wrapped in a list becomes that list's item.
    /// Returns the new container.
    pub fn wrap(&mut self, id: BlockId, container: BlockKind) -> ModelResult<BlockId> {
        let node = self.node(id)?;
        match &container {
            BlockKind::BlockQuote => {
                if node.kind == BlockKind::ListItem {
                    return Err(ModelError::invalid("list items cannot be wrapped in a quote"));
                }
            }
            BlockKind::UnorderedList(_) => {
                if !matches!(node.kind, BlockKind::Paragraph | BlockKind::Heading(_)) {
                    return Err(ModelError::invalid(
                        "only paragraphs and headings can become list items",
                    ));
                }
            }
            _ => {
                return Err(ModelError::invalid(
                    "blocks can only be wrapped in a quote or an unordered list",
                ));
            }
        }
        let (parent, index) = self.position_in_parent(id)?;
        let parent_kind = parent.map(|p| self.kind(p)).transpose()?;
        if !can_contain(parent_kind, &container) {
            return Err(ModelError::invalid("parent cannot hold the new container"));
        }
        let becomes_item = container.is_list();
        debug!("wrap {id:?} in {container:?}");

        let wrapper = self.alloc(container, Vec::new());
        self.child_list_mut(parent)?[index] = wrapper;
        self.node_mut(wrapper)?.parent = parent;
        self.adopt(wrapper, &[id])?;
        if becomes_item {
            self.node_mut(id)?.kind = BlockKind::ListItem;
        }
        Ok(wrapper)
    }

    /// Moves a block out of its enclosing quote or list.
    ///
    /// The container is split around the block and emptied containers are
    /// removed. A list item leaving a top-level list becomes a paragraph and
    /// its nested lists follow it; a list item leaving a nested list is
    /// outdented into the enclosing list, taking its trailing siblings along
    /// as its own nested list.
    pub fn unwrap(&mut self, id: BlockId) -> ModelResult<()> {
        let container = self
            .parent_of(id)?
            .ok_or(ModelError::invalid("block has no enclosing quote or list"))?;
        let container_kind = self.kind(container)?.clone();
        if !container_kind.is_container() {
            return Err(ModelError::invalid("block has no enclosing quote or list"));
        }
        let (grand, container_index) = self.position_in_parent(container)?;
        let outdent_into = match grand {
            Some(g) if *self.kind(g)? == BlockKind::ListItem => Some(g),
            _ => None,
        };
        let siblings = self.node(container)?.children.clone();
        let index = siblings
            .iter()
            .position(|c| *c == id)
            .ok_or(ModelError::invalid("block is not attached to its parent"))?;
        let after = siblings[index + 1..].to_vec();
        debug!("unwrap {id:?} from {container_kind:?}");

        self.node_mut(container)?.children.truncate(index);
        let container_emptied = index == 0;

        if let Some(item) = outdent_into {
            let (outer_list, item_index) = self.position_in_parent(item)?;
            if !after.is_empty() {
                let tail = self.alloc(container_kind, Vec::new());
                self.adopt(tail, &after)?;
                self.adopt(id, &[tail])?;
            }
            if container_emptied {
                self.detach(container)?;
                self.release(container);
            }
            return self.attach(outer_list, item_index + 1, id);
        }

        let mut following = vec![id];
        if container_kind.is_list() {
            let node = self.node_mut(id)?;
            node.kind = BlockKind::Paragraph;
            following.append(&mut node.children);
        }
        if !after.is_empty() {
            let tail = self.alloc(container_kind, Vec::new());
            self.adopt(tail, &after)?;
            following.push(tail);
        }
        let mut insert_at = container_index + 1;
        if container_emptied {
            self.child_list_mut(grand)?.remove(container_index);
            self.release(container);
            insert_at = container_index;
        }
        for (offset, block) in following.into_iter().enumerate() {
            self.attach(grand, insert_at + offset, block)?;
        }
        Ok(())
    }

    /// Splits a text block at the selection, deleting any selected text first.
    ///
    /// The new trailing block keeps the original kind and, for list items,
    /// takes over the nested lists. Returns the new block.
    pub fn split_at(&mut self, selection: Selection) -> ModelResult<BlockId> {
        let (start, _) = self.ordered(selection)?;
        if *self.kind(start.block)? == BlockKind::ThematicBreak {
            return Err(ModelError::invalid("a thematic break cannot be split"));
        }
        if !selection.is_collapsed() {
            self.delete_range(selection)?;
        }
        let (parent, index) = self.position_in_parent(start.block)?;
        let node = self.node_mut(start.block)?;
        let tail = inline::split_off(&mut node.runs, start.offset);
        let kind = node.kind.clone();
        let nested = if kind == BlockKind::ListItem {
            std::mem::take(&mut node.children)
        } else {
            Vec::new()
        };
        debug!("split {:?} at {}", start.block, start.offset);

        let new_block = self.alloc(kind, tail);
        self.adopt(new_block, &nested)?;
        self.attach(parent, index + 1, new_block)?;
        Ok(new_block)
    }

    /// Deletes the selected text, merging the end block into the start block
    /// when the selection spans several blocks.
    pub fn delete_range(&mut self, selection: Selection) -> ModelResult<()> {
        let (start, end) = self.ordered(selection)?;
        if start == end {
            return Ok(());
        }
        if start.block == end.block {
            let node = self.node_mut(start.block)?;
            inline::delete(&mut node.runs, start.offset, end.offset);
            return Ok(());
        }

        let leaves = self.leaves();
        let from = self.leaf_index(&leaves, start.block)?;
        let to = self.leaf_index(&leaves, end.block)?;
        let doomed = leaves[from + 1..=to].to_vec();
        let mut remainder = self.node(end.block)?.runs.clone();
        let remainder = inline::split_off(&mut remainder, end.offset);
        if *self.kind(start.block)? == BlockKind::ThematicBreak && !remainder.is_empty() {
            return Err(ModelError::invalid("text cannot merge into a thematic break"));
        }
        debug!(
            "delete from {:?}@{} to {:?}@{}",
            start.block, start.offset, end.block, end.offset
        );

        let node = self.node_mut(start.block)?;
        let len = inline::char_len(&node.runs);
        inline::delete(&mut node.runs, start.offset, len);
        inline::append(&mut node.runs, remainder);
        if node.kind.is_raw() {
            inline::strip_marks(&mut node.runs);
        }
        for leaf in doomed {
            self.remove_leaf(leaf)?;
        }
        Ok(())
    }

    /// Inserts text at a position, inheriting the marks around the cursor.
    pub fn insert_text(&mut self, at: Position, text: &str) -> ModelResult<()> {
        self.check_position(at)?;
        let node = self.node_mut(at.block)?;
        if node.kind == BlockKind::ThematicBreak {
            return Err(ModelError::invalid("a thematic break cannot hold text"));
        }
        inline::insert(&mut node.runs, at.offset, text);
        Ok(())
    }

    /// A collapsed selection at the start of the block's first text block.
    pub fn move_focus_to_start(&self, id: BlockId) -> ModelResult<Selection> {
        let leaf = self
            .first_leaf(id)?
            .ok_or(ModelError::invalid("block has no text to focus"))?;
        Ok(Selection::caret(leaf, 0))
    }

    // ============ Arena plumbing ============

    fn node(&self, id: BlockId) -> ModelResult<&BlockNode> {
        self.block(id).ok_or(ModelError::UnknownBlock(id))
    }

    fn node_mut(&mut self, id: BlockId) -> ModelResult<&mut BlockNode> {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(ModelError::UnknownBlock(id))
    }

    fn alloc(&mut self, kind: BlockKind, runs: Vec<InlineRun>) -> BlockId {
        let id = BlockId(self.nodes.len());
        self.nodes.push(Some(BlockNode {
            kind,
            parent: None,
            runs,
            children: Vec::new(),
        }));
        id
    }

    fn release(&mut self, id: BlockId) {
        if let Some(slot) = self.nodes.get_mut(id.0) {
            *slot = None;
        }
    }

    fn child_list(&self, parent: Option<BlockId>) -> ModelResult<&Vec<BlockId>> {
        match parent {
            None => Ok(&self.roots),
            Some(p) => Ok(&self.node(p)?.children),
        }
    }

    fn child_list_mut(&mut self, parent: Option<BlockId>) -> ModelResult<&mut Vec<BlockId>> {
        match parent {
            None => Ok(&mut self.roots),
            Some(p) => Ok(&mut self.node_mut(p)?.children),
        }
    }

    fn position_in_parent(&self, id: BlockId) -> ModelResult<(Option<BlockId>, usize)> {
        let parent = self.node(id)?.parent;
        let index = self
            .child_list(parent)?
            .iter()
            .position(|c| *c == id)
            .ok_or(ModelError::invalid("block is not attached to its parent"))?;
        Ok((parent, index))
    }

    fn attach(&mut self, parent: Option<BlockId>, index: usize, id: BlockId) -> ModelResult<()> {
        let list = self.child_list_mut(parent)?;
        let index = index.min(list.len());
        list.insert(index, id);
        self.node_mut(id)?.parent = parent;
        Ok(())
    }

    /// Appends `children` to `parent`'s child list and repoints their parent links.
    fn adopt(&mut self, parent: BlockId, children: &[BlockId]) -> ModelResult<()> {
        for child in children {
            self.node_mut(*child)?.parent = Some(parent);
        }
        self.node_mut(parent)?.children.extend_from_slice(children);
        Ok(())
    }

    fn detach(&mut self, id: BlockId) -> ModelResult<(Option<BlockId>, usize)> {
        let (parent, index) = self.position_in_parent(id)?;
        self.child_list_mut(parent)?.remove(index);
        self.node_mut(id)?.parent = None;
        Ok((parent, index))
    }

    /// Removes a text block; a list item's nested items take its place.
    fn remove_leaf(&mut self, id: BlockId) -> ModelResult<()> {
        let (parent, index) = self.detach(id)?;
        let nested = std::mem::take(&mut self.node_mut(id)?.children);
        let mut promoted = Vec::new();
        for list in nested {
            promoted.append(&mut self.node_mut(list)?.children);
            self.release(list);
        }
        for (offset, item) in promoted.into_iter().enumerate() {
            self.attach(parent, index + offset, item)?;
        }
        self.release(id);
        self.prune(parent)
    }

    /// Removes containers left without children, walking upwards.
    fn prune(&mut self, mut at: Option<BlockId>) -> ModelResult<()> {
        while let Some(id) = at {
            let node = self.node(id)?;
            if !node.kind.is_container() || !node.children.is_empty() {
                break;
            }
            let (parent, _) = self.detach(id)?;
            self.release(id);
            at = parent;
        }
        Ok(())
    }

    fn check_position(&self, pos: Position) -> ModelResult<()> {
        let node = self.node(pos.block)?;
        if !node.kind.is_text() {
            return Err(ModelError::invalid("positions must point into a text block"));
        }
        let len = inline::char_len(&node.runs);
        if pos.offset > len {
            return Err(ModelError::OffsetOutOfRange {
                block: pos.block,
                offset: pos.offset,
                len,
            });
        }
        Ok(())
    }

    fn leaf_index(&self, leaves: &[BlockId], id: BlockId) -> ModelResult<usize> {
        leaves
            .iter()
            .position(|l| *l == id)
            .ok_or(ModelError::invalid("block is not reachable from the roots"))
    }

    /// Validates both ends of a selection and returns them in document order.
    pub fn ordered(&self, selection: Selection) -> ModelResult<(Position, Position)> {
        let (a, b) = (selection.start, selection.end);
        self.check_position(a)?;
        self.check_position(b)?;
        if a.block == b.block {
            return Ok(if a.offset <= b.offset { (a, b) } else { (b, a) });
        }
        let leaves = self.leaves();
        let ia = self.leaf_index(&leaves, a.block)?;
        let ib = self.leaf_index(&leaves, b.block)?;
        Ok(if ia < ib { (a, b) } else { (b, a) })
    }
}
