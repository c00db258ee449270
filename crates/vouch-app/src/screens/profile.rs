//! Profile editor.
//!
//! Holds the server copy of the profile (used for the score and level) and a
//! set of editable fields seeded from it. Saving validates the social links
//! first; the server response then replaces both copies.

use std::path::PathBuf;

use vouch_core::{
    Level, ProfileAttribute, ProfileRecord, ProfileUpdate, Score, SocialLink, completeness_score,
    missing_attributes, validation,
};

use super::{FocusMove, Outcome, cycle};
use crate::{Alert, KeyInput, TextInput};

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileFocus {
    /// Display name.
    #[default]
    Name,
    /// Biography.
    Bio,
    /// GitHub URL.
    GitHub,
    /// LinkedIn URL.
    LinkedIn,
    /// Instagram URL.
    Instagram,
    /// Local path of an image to upload.
    ImagePath,
    /// Upload Image button.
    Upload,
    /// Save Changes button.
    Save,
    /// Log Out button.
    Logout,
}

impl ProfileFocus {
    const ORDER: [Self; 9] = [
        Self::Name,
        Self::Bio,
        Self::GitHub,
        Self::LinkedIn,
        Self::Instagram,
        Self::ImagePath,
        Self::Upload,
        Self::Save,
        Self::Logout,
    ];

    fn is_field(self) -> bool {
        !matches!(self, Self::Upload | Self::Save | Self::Logout)
    }
}

/// Profile screen state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileScreen {
    profile: Option<ProfileRecord>,
    loading: bool,
    name: TextInput,
    bio: TextInput,
    github: TextInput,
    linkedin: TextInput,
    instagram: TextInput,
    image_path: TextInput,
    focus: ProfileFocus,
    saving: bool,
    uploading: bool,
}

impl ProfileScreen {
    /// Screen waiting for its first profile load.
    pub(crate) fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Server copy of the profile. `None` until the first load completes.
    pub fn profile(&self) -> Option<&ProfileRecord> {
        self.profile.as_ref()
    }

    /// A profile load is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// A save is outstanding.
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// An upload is outstanding.
    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Completeness of the server copy. Zero before the first load.
    pub fn score(&self) -> Score {
        self.profile.as_ref().map_or(Score::ZERO, completeness_score)
    }

    /// Level of [`Self::score`].
    pub fn level(&self) -> Level {
        self.score().level()
    }

    /// Attributes that would raise the score.
    pub fn missing(&self) -> Vec<ProfileAttribute> {
        self.profile.as_ref().map_or_else(|| ProfileAttribute::ALL.to_vec(), missing_attributes)
    }

    /// Name field.
    pub fn name(&self) -> &TextInput {
        &self.name
    }

    /// Bio field.
    pub fn bio(&self) -> &TextInput {
        &self.bio
    }

    /// Field for a social link.
    pub fn social(&self, link: SocialLink) -> &TextInput {
        match link {
            SocialLink::GitHub => &self.github,
            SocialLink::LinkedIn => &self.linkedin,
            SocialLink::Instagram => &self.instagram,
        }
    }

    /// Image path field.
    pub fn image_path(&self) -> &TextInput {
        &self.image_path
    }

    /// Focused control.
    pub fn focus(&self) -> ProfileFocus {
        self.focus
    }

    /// Editable fields as they would be saved.
    pub fn draft(&self) -> ProfileUpdate {
        ProfileUpdate {
            name: self.name.value().to_string(),
            bio: self.bio.value().to_string(),
            github_url: self.github.value().to_string(),
            linkedin_url: self.linkedin.value().to_string(),
            instagram_url: self.instagram.value().to_string(),
        }
    }

    fn field_mut(&mut self, focus: ProfileFocus) -> Option<&mut TextInput> {
        match focus {
            ProfileFocus::Name => Some(&mut self.name),
            ProfileFocus::Bio => Some(&mut self.bio),
            ProfileFocus::GitHub => Some(&mut self.github),
            ProfileFocus::LinkedIn => Some(&mut self.linkedin),
            ProfileFocus::Instagram => Some(&mut self.instagram),
            ProfileFocus::ImagePath => Some(&mut self.image_path),
            ProfileFocus::Upload | ProfileFocus::Save | ProfileFocus::Logout => None,
        }
    }

    pub(crate) fn handle_key(&mut self, key: KeyInput) -> Outcome {
        if let Some(step) = FocusMove::from_key(key) {
            self.focus = cycle(&ProfileFocus::ORDER, self.focus, step);
            return Outcome::Redraw;
        }

        if key == KeyInput::Enter {
            return match self.focus {
                ProfileFocus::Upload => self.upload(),
                ProfileFocus::Save => self.save(),
                ProfileFocus::Logout => Outcome::Logout,
                focus if focus.is_field() => {
                    self.focus = cycle(&ProfileFocus::ORDER, focus, FocusMove::Next);
                    Outcome::Redraw
                },
                _ => Outcome::Redraw,
            };
        }

        if let Some(field) = self.field_mut(self.focus) {
            field.handle_key(key);
        }
        Outcome::Redraw
    }

    fn save(&mut self) -> Outcome {
        if self.saving || self.profile.is_none() {
            return Outcome::Redraw;
        }

        for link in SocialLink::ALL {
            if let Err(err) = validation::validate_social_url(link, self.social(link).value()) {
                return Outcome::Alert(Alert::new("Invalid URL", err.to_string()));
            }
        }

        self.saving = true;
        Outcome::Save(self.draft())
    }

    fn upload(&mut self) -> Outcome {
        let path = self.image_path.value().trim();
        if self.uploading || path.is_empty() {
            return Outcome::Redraw;
        }

        let path = PathBuf::from(path);
        self.uploading = true;
        Outcome::Upload(path)
    }

    /// Apply a fetched profile. Returns whether a load was outstanding.
    pub(crate) fn loaded(&mut self, record: ProfileRecord) -> bool {
        let was_loading = std::mem::replace(&mut self.loading, false);
        if was_loading {
            self.reseed(record);
        }
        was_loading
    }

    /// Returns whether a load was outstanding.
    pub(crate) fn load_failed(&mut self) -> bool {
        std::mem::replace(&mut self.loading, false)
    }

    /// Replace the server copy and reseed the editable fields.
    fn reseed(&mut self, record: ProfileRecord) {
        let update = record.to_update();
        self.name.set(update.name);
        self.bio.set(update.bio);
        self.github.set(update.github_url);
        self.linkedin.set(update.linkedin_url);
        self.instagram.set(update.instagram_url);
        self.profile = Some(record);
    }

    /// Returns whether a save was outstanding.
    pub(crate) fn saved(&mut self, record: ProfileRecord) -> bool {
        let was_saving = std::mem::replace(&mut self.saving, false);
        if was_saving {
            self.reseed(record);
        }
        was_saving
    }

    /// Returns whether a save was outstanding.
    pub(crate) fn save_failed(&mut self) -> bool {
        std::mem::replace(&mut self.saving, false)
    }

    /// Returns whether an upload was outstanding. Marks a reload as pending.
    pub(crate) fn uploaded(&mut self) -> bool {
        let was_uploading = std::mem::replace(&mut self.uploading, false);
        if was_uploading {
            self.image_path.clear();
            self.loading = true;
        }
        was_uploading
    }

    /// Returns whether an upload was outstanding.
    pub(crate) fn upload_failed(&mut self) -> bool {
        std::mem::replace(&mut self.uploading, false)
    }
}
