use crate::foundation::error::{StrataError, StrataResult};
use crate::foundation::ids::MobjectId;
use crate::mobject::node::Mobject;

/// Arena of Mobjects plus the ordered display list of the ones currently on screen.
///
/// The arena owns every Mobject; the display list only refers to them by id, so removing a
/// Mobject from the screen does not drop it.
#[derive(Debug, Default, Clone)]
pub struct SceneGraph {
    slots: Vec<Option<Mobject>>,
    display: Vec<MobjectId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `m` without displaying it.
    pub fn insert(&mut self, m: Mobject) -> MobjectId {
        let id = MobjectId(self.slots.len() as u32);
        self.slots.push(Some(m));
        id
    }

    /// Store `m` and put it on top of the display list.
    pub fn insert_shown(&mut self, m: Mobject) -> MobjectId {
        let id = self.insert(m);
        self.display.push(id);
        id
    }

    pub fn contains(&self, id: MobjectId) -> bool {
        matches!(self.slots.get(id.index()), Some(Some(_)))
    }

    pub fn get(&self, id: MobjectId) -> StrataResult<&Mobject> {
        self.slots
            .get(id.index())
            .and_then(Option::as_ref)
            .ok_or_else(|| StrataError::construction(format!("unknown {id}")))
    }

    pub fn get_mut(&mut self, id: MobjectId) -> StrataResult<&mut Mobject> {
        self.slots
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or_else(|| StrataError::construction(format!("unknown {id}")))
    }

    /// Put `id` on top of the display list (moving it there if already shown).
    pub fn show(&mut self, id: MobjectId) -> StrataResult<()> {
        self.get(id)?;
        self.display.retain(|d| *d != id);
        self.display.push(id);
        Ok(())
    }

    /// Show `id` unless it is already displayed; keeps its current stacking.
    pub fn ensure_shown(&mut self, id: MobjectId) -> StrataResult<()> {
        if !self.is_displayed(id) {
            self.show(id)?;
        }
        Ok(())
    }

    /// Take `id` off the screen. It stays in the arena.
    pub fn hide(&mut self, id: MobjectId) {
        self.display.retain(|d| *d != id);
    }

    /// Drop `id` from the arena and the screen, returning it.
    pub fn remove(&mut self, id: MobjectId) -> StrataResult<Mobject> {
        self.hide(id);
        self.slots
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or_else(|| StrataError::construction(format!("unknown {id}")))
    }

    pub fn is_displayed(&self, id: MobjectId) -> bool {
        self.display.contains(&id)
    }

    /// Displayed ids, bottom to top.
    pub fn display_list(&self) -> &[MobjectId] {
        &self.display
    }

    /// Displayed Mobjects, bottom to top.
    pub fn displayed(&self) -> impl Iterator<Item = &Mobject> + '_ {
        self.display
            .iter()
            .filter_map(|id| self.slots.get(id.index()).and_then(Option::as_ref))
    }

    pub fn clear_display(&mut self) {
        self.display.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mobject/graph.rs"]
mod tests;
