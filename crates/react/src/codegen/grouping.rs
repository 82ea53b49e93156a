//! Overload grouping
//!
//! Partitions one contract's ABI into hook items. Functions sharing a base
//! name (and read/write class) collapse into a single group emitted once, at
//! the position of the group's first member.

use std::collections::HashMap;

use super::parser::{AbiEvent, AbiFunction, AbiItem};

/// ABI entries that share a base name and are emitted as one hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverloadGroup<'a, T> {
    /// Base name shared by every member
    pub name: &'a str,
    /// Members in ABI order
    pub members: Vec<&'a T>,
}

impl<'a, T> OverloadGroup<'a, T> {
    fn new(name: &'a str, first: &'a T) -> Self {
        Self {
            name,
            members: vec![first],
        }
    }

    /// Whether more than one signature shares this name
    pub fn is_overloaded(&self) -> bool {
        self.members.len() > 1
    }
}

/// A unit of emission within one contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookItem<'a> {
    /// pure/view functions
    Read(OverloadGroup<'a, AbiFunction>),
    /// nonpayable/payable functions
    Write(OverloadGroup<'a, AbiFunction>),
    Event(OverloadGroup<'a, AbiEvent>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum GroupClass {
    Read,
    Write,
    Event,
}

/// Group a contract's ABI into hook items, preserving ABI order
pub fn group_abi(abi: &[AbiItem]) -> Vec<HookItem<'_>> {
    let mut items: Vec<HookItem<'_>> = Vec::new();
    let mut positions: HashMap<(GroupClass, &str), usize> = HashMap::new();

    for entry in abi {
        match entry {
            AbiItem::Function(function) => {
                let class = if function.state_mutability.is_read() {
                    GroupClass::Read
                } else {
                    GroupClass::Write
                };
                match positions.get(&(class, function.name.as_str())) {
                    Some(&index) => {
                        if let HookItem::Read(group) | HookItem::Write(group) = &mut items[index] {
                            group.members.push(function);
                        }
                    }
                    None => {
                        positions.insert((class, function.name.as_str()), items.len());
                        let group = OverloadGroup::new(function.name.as_str(), function);
                        items.push(match class {
                            GroupClass::Read => HookItem::Read(group),
                            _ => HookItem::Write(group),
                        });
                    }
                }
            }
            AbiItem::Event(event) => match positions.get(&(GroupClass::Event, event.name.as_str())) {
                Some(&index) => {
                    if let HookItem::Event(group) = &mut items[index] {
                        group.members.push(event);
                    }
                }
                None => {
                    positions.insert((GroupClass::Event, event.name.as_str()), items.len());
                    items.push(HookItem::Event(OverloadGroup::new(event.name.as_str(), event)));
                }
            },
            AbiItem::Error(_) | AbiItem::Constructor(_) | AbiItem::Fallback(_) | AbiItem::Receive(_) => {}
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::parser::{AbiParameter, StateMutability};

    fn function(name: &str, inputs: &[&str], state_mutability: StateMutability) -> AbiItem {
        AbiItem::Function(AbiFunction {
            name: name.to_string(),
            inputs: inputs.iter().map(|t| AbiParameter::new(*t)).collect(),
            outputs: vec![],
            state_mutability,
        })
    }

    fn event(name: &str) -> AbiItem {
        AbiItem::Event(AbiEvent {
            name: name.to_string(),
            inputs: vec![],
            anonymous: false,
        })
    }

    #[test]
    fn test_overloads_merge_at_first_position() {
        let abi = vec![
            function("safeTransferFrom", &["address", "address", "uint256"], StateMutability::Nonpayable),
            function("approve", &["address", "uint256"], StateMutability::Nonpayable),
            function(
                "safeTransferFrom",
                &["address", "address", "uint256", "bytes"],
                StateMutability::Nonpayable,
            ),
        ];

        let items = group_abi(&abi);
        assert_eq!(items.len(), 2);
        match &items[0] {
            HookItem::Write(group) => {
                assert_eq!(group.name, "safeTransferFrom");
                assert!(group.is_overloaded());
                assert_eq!(group.members[1].inputs.len(), 4);
            }
            other => panic!("expected write group, got {:?}", other),
        }
        assert!(matches!(&items[1], HookItem::Write(g) if g.name == "approve" && !g.is_overloaded()));
    }

    #[test]
    fn test_read_and_write_classes_do_not_merge() {
        let abi = vec![
            function("value", &[], StateMutability::View),
            function("value", &["uint256"], StateMutability::Nonpayable),
        ];
        let items = group_abi(&abi);
        assert_eq!(items.len(), 2);
        assert!(matches!(items[0], HookItem::Read(_)));
        assert!(matches!(items[1], HookItem::Write(_)));
    }

    #[test]
    fn test_order_and_ignored_items() {
        let abi = vec![
            event("Transfer"),
            AbiItem::Constructor(AbiFunction {
                name: "constructor".to_string(),
                inputs: vec![],
                outputs: vec![],
                state_mutability: StateMutability::Nonpayable,
            }),
            function("name", &[], StateMutability::Pure),
            event("Approval"),
        ];
        let names: Vec<&str> = group_abi(&abi)
            .iter()
            .map(|item| match item {
                HookItem::Read(g) | HookItem::Write(g) => g.name,
                HookItem::Event(g) => g.name,
            })
            .collect();
        assert_eq!(names, vec!["Transfer", "name", "Approval"]);
    }
}
