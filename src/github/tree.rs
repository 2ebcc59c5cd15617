use crate::models::{ContentType, EntryKind, FilteredTree, Leaf, TreeEntry, TreeNode};

/// Builds the nested source/notebook view of a flat tree listing.
///
/// Only blobs ending in `.py` or `.ipynb` survive; every directory in the
/// result exists because some leaf was placed below it. On key collisions
/// the later entry wins.
pub fn build_filtered_tree(
    entries: &[TreeEntry],
    owner: &str,
    repo: &str,
    branch: &str,
    web_base: &str,
) -> FilteredTree {
    let base_url = format!(
        "{}/{}/{}/blob/{}/",
        web_base.trim_end_matches('/'),
        owner,
        repo,
        branch
    );
    tracing::debug!("Building filtered tree for {}/{} at {}", owner, repo, base_url);

    let mut tree = FilteredTree::new();

    for entry in entries {
        if entry.kind != EntryKind::Blob {
            continue;
        }
        let Some(content_type) = ContentType::from_path(&entry.path) else {
            continue;
        };

        let mut parts: Vec<&str> = entry.path.split('/').collect();
        let Some(file_name) = parts.pop() else {
            continue;
        };

        let mut level = &mut tree;
        for part in parts {
            let node = level
                .entry(part.to_string())
                .or_insert_with(|| TreeNode::Directory(FilteredTree::new()));
            if let TreeNode::Leaf(leaf) = &*node {
                tracing::warn!("Directory {} replaces file {}", part, leaf.path);
                *node = TreeNode::Directory(FilteredTree::new());
            }
            level = match node {
                TreeNode::Directory(children) => children,
                TreeNode::Leaf(_) => unreachable!("leaf replaced above"),
            };
        }

        let leaf = TreeNode::Leaf(Leaf {
            url: format!("{}{}", base_url, entry.path),
            path: entry.path.clone(),
            content_type,
        });
        if let Some(previous) = level.insert(file_name.to_string(), leaf) {
            tracing::warn!("Duplicate tree key {} replaced: {:?}", entry.path, previous);
        }
    }

    tree
}

/// Number of leaves in a filtered tree.
pub fn count_leaves(tree: &FilteredTree) -> usize {
    tree.values()
        .map(|node| match node {
            TreeNode::Leaf(_) => 1,
            TreeNode::Directory(children) => count_leaves(children),
        })
        .sum()
}
