//! Mock records used whenever the spreadsheet cannot answer.

use crate::model::{Challenge, GroupId, TeamMember};

/// Group assigned when the Students sheet has no row (or no group) for a login.
pub const FALLBACK_GROUP_ID: &str = "G001";

/// Topic given to a group member listed without a matching topic column entry.
pub const DEFAULT_MEMBER_TOPIC: &str = "Data Structures";

pub const DEFAULT_DESCRIPTION: &str = "No description";
pub const DEFAULT_TOPICS: &str = "N/A";

#[must_use]
pub fn fallback_group_id() -> GroupId {
    GroupId::new(FALLBACK_GROUP_ID)
}

#[must_use]
pub fn fallback_team() -> Vec<TeamMember> {
    vec![
        TeamMember::new("Omar Khalil", "Linked Lists"),
        TeamMember::new("Khaled Ibrahim", "Queues"),
        TeamMember::new("Layla Mahmoud", "Binary Search Trees"),
    ]
}

#[must_use]
pub fn fallback_challenges() -> Vec<Challenge> {
    vec![
        Challenge::new(
            1,
            "Layla, explain how Binary Search Trees work to the group. Focus on BST properties, \
             insertion, and search operations. Omar and Khaled, compare this with your data \
             structures - how is searching in a BST different from searching in a linked list \
             or checking elements in a queue?",
            "Binary Search Trees, Linked Lists, Queues",
            hints(&[
                "Start by drawing a simple diagram showing how nodes are organized in a BST with \
                 the property: left < parent < right",
                "Think about the left-subtree and right-subtree properties - what makes a BST \
                 special compared to a regular tree?",
                "Compare time complexity: BST search is O(log n) average case, while linked list \
                 search is O(n)",
            ]),
        ),
        Challenge::new(
            2,
            "Omar, teach us about Linked Lists. Create a real-world example showing both singly \
             and doubly linked lists. Layla and Khaled, find connections between Linked Lists \
             and your data structures.",
            "Linked Lists, Binary Search Trees, Queues",
            hints(&[
                "Think about how nodes point to each other - singly linked has 'next' pointer, \
                 doubly linked has 'next' and 'prev'",
                "Consider real-world examples: browser history (doubly linked), music playlist \
                 (singly linked), undo/redo (doubly linked)",
                "Both BST nodes and queue nodes use pointers/references just like linked lists - \
                 they're all node-based structures!",
            ]),
        ),
        Challenge::new(
            3,
            "Everyone: Design ONE real-world system that uses ALL three data structures (BST, \
             Linked Lists, Queues). Explain how they work together. Be creative!",
            "Binary Search Trees, Linked Lists, Queues",
            hints(&[
                "Think of a system with searching, ordering, and waiting - like a restaurant \
                 management system or task scheduler",
                "Example: Restaurant app with BST for menu items (fast lookup by price/name), \
                 Queue for order processing, Linked List for order history",
                "Draw a diagram showing how data flows between the three structures in your \
                 system",
            ]),
        ),
    ]
}

fn hints(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| (*line).to_string()).collect()
}
