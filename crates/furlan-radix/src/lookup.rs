// Exact lookup and prefix enumeration over the encoded tree

use crate::WordCase;
use crate::format::common_prefix_len;
use crate::node::Node;

/// Deepest descent allowed before a walk is abandoned. Real words are far
/// shorter; the limit only matters for corrupt data.
pub(crate) const MAX_DEPTH: usize = 256;

/// Exact match of `rest` starting at `node`.
///
/// Edges are stored in ascending label order, so the scan stops as soon as
/// an edge label sorts after the query.
pub(crate) fn lookup_from(node: Node<'_>, rest: &[u8], depth: usize) -> Option<WordCase> {
    if depth > MAX_DEPTH {
        return None;
    }
    for edge in node.edges() {
        let label = edge.label();
        let i = common_prefix_len(label, rest);
        if i == label.len() {
            if i == rest.len() {
                return edge.word_case();
            }
            if label.is_empty() {
                continue;
            }
            let child = edge.child()?;
            return lookup_from(child, &rest[i..], depth + 1);
        }
        if i == rest.len() {
            // Query ends inside this label.
            return None;
        }
        if label[i] > rest[i] {
            return None;
        }
    }
    None
}

/// Collect words under `node` into `out`, depth-first in byte order,
/// until `max` words are gathered.
pub(crate) fn collect_words(
    node: Node<'_>,
    prefix: &mut Vec<u8>,
    max: usize,
    depth: usize,
    out: &mut Vec<(Vec<u8>, WordCase)>,
) {
    if depth > MAX_DEPTH {
        return;
    }
    for edge in node.edges() {
        if out.len() >= max {
            return;
        }
        let mark = prefix.len();
        prefix.extend_from_slice(edge.label());
        if let Some(case) = edge.word_case() {
            out.push((prefix.clone(), case));
        }
        if let Some(child) = edge.child() {
            collect_words(child, prefix, max, depth + 1, out);
        }
        prefix.truncate(mark);
    }
}

/// Locate the subtree holding every word that starts with `query`.
///
/// Returns the node to enumerate from, the full path spelled so far, and
/// whether the path itself is a word when the query ends mid-label.
pub(crate) fn find_prefix<'a>(
    node: Node<'a>,
    query: &[u8],
    depth: usize,
) -> Option<PrefixHit<'a>> {
    if depth > MAX_DEPTH {
        return None;
    }
    if query.is_empty() {
        return Some(PrefixHit::Node(node, Vec::new()));
    }
    for edge in node.edges() {
        let label = edge.label();
        let i = common_prefix_len(label, query);
        if i == query.len() {
            // Query is covered by this edge: everything below it matches.
            return Some(PrefixHit::Edge {
                spelled: label.to_vec(),
                case: edge.word_case(),
                child: edge.child(),
            });
        }
        if i == label.len() && !label.is_empty() {
            let child = edge.child()?;
            return find_prefix(child, &query[i..], depth + 1).map(|hit| hit.prepend(label));
        }
        if i < label.len() && label[i] > query[i] {
            return None;
        }
    }
    None
}

pub(crate) enum PrefixHit<'a> {
    /// Enumerate every word under the node; the vector is the path to it.
    Node(Node<'a>, Vec<u8>),
    /// The query ends inside (or exactly at the end of) an edge.
    Edge {
        spelled: Vec<u8>,
        case: Option<WordCase>,
        child: Option<Node<'a>>,
    },
}

impl PrefixHit<'_> {
    fn prepend(self, head: &[u8]) -> Self {
        let join = |tail: Vec<u8>| {
            let mut v = head.to_vec();
            v.extend_from_slice(&tail);
            v
        };
        match self {
            PrefixHit::Node(node, path) => PrefixHit::Node(node, join(path)),
            PrefixHit::Edge {
                spelled,
                case,
                child,
            } => PrefixHit::Edge {
                spelled: join(spelled),
                case,
                child,
            },
        }
    }
}
