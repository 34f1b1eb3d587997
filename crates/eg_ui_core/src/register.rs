//! Open-state register shared by the disclosure-style controllers.
//!
//! A register maps a group key to the members currently open in that group. Controllers decide
//! transitions here and then project them onto the document; nothing scans the document to
//! find out what is open.

use std::collections::BTreeMap;

/// How many members of a group may be open at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusivity {
    /// Opening a member closes every other member of the group.
    Single,
    /// Members open and close independently.
    Multiple,
}

/// Members closed and opened by a single register operation, in application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<M> {
    pub closed: Vec<M>,
    pub opened: Option<M>,
}

impl<M> Default for Transition<M> {
    fn default() -> Self {
        Self {
            closed: Vec::new(),
            opened: None,
        }
    }
}

impl<M> Transition<M> {
    pub fn is_empty(&self) -> bool {
        self.closed.is_empty() && self.opened.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct OpenRegister<G, M> {
    groups: BTreeMap<G, Vec<M>>,
}

impl<G, M> Default for OpenRegister<G, M> {
    fn default() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }
}

impl<G, M> OpenRegister<G, M>
where
    G: Ord + Clone,
    M: PartialEq + Copy,
{
    pub fn is_open(&self, group: &G, member: M) -> bool {
        self.groups
            .get(group)
            .map(|open| open.contains(&member))
            .unwrap_or(false)
    }

    /// Open members of `group` in the order they were opened.
    pub fn open_members(&self, group: &G) -> &[M] {
        self.groups.get(group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total open members across all groups.
    pub fn open_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Opens `member`, closing the rest of the group first under [`Exclusivity::Single`].
    ///
    /// Opening an already-open member reports no `opened` entry.
    pub fn open(&mut self, group: &G, member: M, exclusivity: Exclusivity) -> Transition<M> {
        let mut transition = Transition::default();
        if exclusivity == Exclusivity::Single {
            transition.closed = self.close_all_except(group, Some(member));
        }
        let open = self.groups.entry(group.clone()).or_default();
        if !open.contains(&member) {
            open.push(member);
            transition.opened = Some(member);
        }
        transition
    }

    /// Closes `member`; returns whether it was open.
    pub fn close(&mut self, group: &G, member: M) -> bool {
        let Some(open) = self.groups.get_mut(group) else {
            return false;
        };
        let before = open.len();
        open.retain(|m| *m != member);
        let closed = open.len() != before;
        if open.is_empty() {
            self.groups.remove(group);
        }
        closed
    }

    /// Closes every open member of `group`.
    pub fn close_all(&mut self, group: &G) -> Vec<M> {
        self.close_all_except(group, None)
    }

    /// Closes every open member of `group` other than `keep`.
    pub fn close_all_except(&mut self, group: &G, keep: Option<M>) -> Vec<M> {
        let Some(open) = self.groups.get_mut(group) else {
            return Vec::new();
        };
        let mut closed = Vec::new();
        open.retain(|m| {
            if Some(*m) == keep {
                true
            } else {
                closed.push(*m);
                false
            }
        });
        if open.is_empty() {
            self.groups.remove(group);
        }
        closed
    }

    /// Closes everything else in the group (under [`Exclusivity::Single`]), then flips `member`.
    pub fn toggle(&mut self, group: &G, member: M, exclusivity: Exclusivity) -> Transition<M> {
        let mut transition = Transition::default();
        if exclusivity == Exclusivity::Single {
            transition.closed = self.close_all_except(group, Some(member));
        }
        if self.close(group, member) {
            transition.closed.push(member);
        } else {
            self.groups.entry(group.clone()).or_default().push(member);
            transition.opened = Some(member);
        }
        transition
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn single_toggle_closes_others_before_opening() {
        let mut register = OpenRegister::<(), u8>::default();
        register.toggle(&(), 1, Exclusivity::Single);

        let transition = register.toggle(&(), 2, Exclusivity::Single);
        assert_eq!(
            transition,
            Transition {
                closed: vec![1],
                opened: Some(2),
            }
        );
        assert_eq!(register.open_members(&()), &[2]);
    }

    #[test]
    fn toggling_open_member_closes_it() {
        let mut register = OpenRegister::<(), u8>::default();
        register.toggle(&(), 1, Exclusivity::Single);

        let transition = register.toggle(&(), 1, Exclusivity::Single);
        assert_eq!(transition.closed, vec![1]);
        assert_eq!(transition.opened, None);
        assert_eq!(register.open_count(), 0);
    }

    #[test]
    fn multiple_groups_stay_independent() {
        let mut register = OpenRegister::<&str, u8>::default();
        register.toggle(&"a", 1, Exclusivity::Multiple);
        register.toggle(&"a", 2, Exclusivity::Multiple);
        register.toggle(&"b", 3, Exclusivity::Single);

        assert_eq!(register.open_members(&"a"), &[1, 2]);
        assert_eq!(register.open_members(&"b"), &[3]);
        assert_eq!(register.close_all(&"a"), vec![1, 2]);
        assert!(register.is_open(&"b", 3));
    }

    #[test]
    fn open_is_idempotent() {
        let mut register = OpenRegister::<(), u8>::default();
        assert_eq!(register.open(&(), 4, Exclusivity::Single).opened, Some(4));
        assert!(register.open(&(), 4, Exclusivity::Single).is_empty());
        assert!(!register.close(&(), 9));
    }
}
