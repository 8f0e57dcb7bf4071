//! Request workflow for recording create/edit/details/index.
//!
//! Form requests move through an explicit [`FormState`]:
//!
//! ```text
//! Initial                                   (GET: blank or pre-populated form)
//! Submitted -> Valid   -> Persisted         (caller redirects to the index)
//!           -> Invalid -> ReRendered        (caller redisplays form + errors)
//! BadRequest | NotFound                     (edit/details entry guards)
//! ```
//!
//! Field problems never surface as errors; they end in `ReRendered`.
//! [`WorkflowError`] is reserved for contract violations and storage failures,
//! which abort the request.

use crate::locale::Locale;
use crate::recording::form::{FieldErrors, FormView, RecordingForm, RecordingFormModel};
use crate::recording::mapper::{from_aggregate, to_aggregate};
use crate::recording::track_list::StructuralMismatch;
use crate::recording::{Recording, RecordingDetails, RecordingDraft};
use crate::reference::ReferenceData;
use crate::store::{CatalogStore, StoreError};
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error(transparent)]
    StructuralMismatch(#[from] StructuralMismatch),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Where a valid submission is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Create,
    Edit(DbId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    /// Form shown for input. Terminal for GET requests.
    Initial(FormView),
    Submitted {
        target: Target,
        form: RecordingFormModel,
    },
    Valid {
        target: Target,
        draft: RecordingDraft,
    },
    Invalid {
        form: RecordingFormModel,
        errors: FieldErrors,
        reference: ReferenceData,
    },
    Persisted(DbId),
    ReRendered(FormView),
    /// No id was supplied where one is required.
    BadRequest,
    /// The supplied id does not match a stored recording.
    NotFound(DbId),
}

impl FormState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            FormState::Initial(_)
                | FormState::Persisted(_)
                | FormState::ReRendered(_)
                | FormState::BadRequest
                | FormState::NotFound(_)
        )
    }

    fn name(&self) -> &'static str {
        match self {
            FormState::Initial(_) => "initial",
            FormState::Submitted { .. } => "submitted",
            FormState::Valid { .. } => "valid",
            FormState::Invalid { .. } => "invalid",
            FormState::Persisted(_) => "persisted",
            FormState::ReRendered(_) => "re_rendered",
            FormState::BadRequest => "bad_request",
            FormState::NotFound(_) => "not_found",
        }
    }
}

/// Outcome of a read-only details request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsOutcome {
    Found(RecordingDetails),
    BadRequest,
    NotFound(DbId),
}

/// Drives one request against a [`CatalogStore`].
pub struct RecordingWorkflow<'a, S: ?Sized> {
    store: &'a S,
    locale: Locale,
}

impl<'a, S: CatalogStore + ?Sized> RecordingWorkflow<'a, S> {
    pub fn new(store: &'a S, locale: Locale) -> Self {
        Self { store, locale }
    }

    /// Create/GET: a blank form with reference lists.
    pub async fn create_form(&self) -> Result<FormState, WorkflowError> {
        let reference = self.load_reference().await?;
        Ok(FormState::Initial(FormView::new(
            RecordingFormModel::blank(),
            FieldErrors::default(),
            reference,
        )))
    }

    /// Edit/GET: the stored recording as a pre-populated form.
    pub async fn edit_form(&self, id: Option<DbId>) -> Result<FormState, WorkflowError> {
        let recording = match self.guard(id).await? {
            Ok(recording) => recording,
            Err(state) => return Ok(state),
        };
        let reference = self.load_reference().await?;
        Ok(FormState::Initial(FormView::new(
            from_aggregate(&recording),
            FieldErrors::default(),
            reference,
        )))
    }

    /// Create/POST.
    pub async fn submit_create(&self, form: RecordingForm) -> Result<FormState, WorkflowError> {
        let form = self.receive(form)?;
        self.run(FormState::Submitted {
            target: Target::Create,
            form,
        })
        .await
    }

    /// Edit/POST. The id travels inside the form payload.
    pub async fn submit_edit(&self, form: RecordingForm) -> Result<FormState, WorkflowError> {
        let id = match self.guard(form.id).await? {
            Ok(recording) => recording.id,
            Err(state) => return Ok(state),
        };
        let form = self.receive(form)?;
        self.run(FormState::Submitted {
            target: Target::Edit(id),
            form,
        })
        .await
    }

    pub async fn details(&self, id: Option<DbId>) -> Result<DetailsOutcome, WorkflowError> {
        let Some(id) = id else {
            return Ok(DetailsOutcome::BadRequest);
        };
        Ok(match self.store.find_recording(id).await? {
            Some(recording) => DetailsOutcome::Found(recording.into()),
            None => DetailsOutcome::NotFound(id),
        })
    }

    pub async fn index(&self) -> Result<Vec<Recording>, WorkflowError> {
        Ok(self.store.list_recordings().await?)
    }

    /// Advance until a terminal state is reached.
    pub async fn run(&self, mut state: FormState) -> Result<FormState, WorkflowError> {
        while !state.is_terminal() {
            state = self.advance(state).await?;
        }
        Ok(state)
    }

    /// Perform a single transition. Terminal states are returned unchanged.
    pub async fn advance(&self, state: FormState) -> Result<FormState, WorkflowError> {
        let from = state.name();
        let next = match state {
            FormState::Submitted { target, form } => {
                let reference = self.load_reference().await?;
                let mapped = to_aggregate(
                    &form,
                    self.locale,
                    |id| reference.artist(id).cloned(),
                    |id| reference.label(id).cloned(),
                );
                match mapped {
                    Ok(draft) => FormState::Valid { target, draft },
                    Err(errors) => FormState::Invalid {
                        form,
                        errors,
                        reference,
                    },
                }
            }
            FormState::Valid { target, draft } => self.commit(target, &draft).await?,
            FormState::Invalid {
                form,
                errors,
                reference,
            } => {
                let fields: Vec<&str> = errors.fields().collect();
                tracing::warn!(?fields, "Recording form rejected, re-rendering");
                FormState::ReRendered(FormView::new(form, errors, reference))
            }
            terminal => terminal,
        };
        tracing::debug!(from, to = next.name(), "Recording workflow transition");
        Ok(next)
    }

    async fn commit(&self, target: Target, draft: &RecordingDraft) -> Result<FormState, WorkflowError> {
        match target {
            Target::Create => {
                let id = self.store.add_recording(draft).await?;
                tracing::info!(recording_id = id, tracks = draft.tracks.len(), "Recording created");
                Ok(FormState::Persisted(id))
            }
            Target::Edit(id) => {
                if self.store.update_recording(id, draft).await? {
                    tracing::info!(recording_id = id, tracks = draft.tracks.len(), "Recording updated");
                    Ok(FormState::Persisted(id))
                } else {
                    Ok(FormState::NotFound(id))
                }
            }
        }
    }

    /// Pair the wire lists into rows; unequal lengths abort the request.
    fn receive(&self, form: RecordingForm) -> Result<RecordingFormModel, WorkflowError> {
        RecordingFormModel::try_from(form).map_err(|err| {
            tracing::error!(
                titles = err.titles,
                durations = err.durations,
                "Recording form violates the paired track list contract"
            );
            WorkflowError::from(err)
        })
    }

    /// Entry guard for id-addressed requests: `Err` carries the terminal state.
    async fn guard(&self, id: Option<DbId>) -> Result<Result<Recording, FormState>, WorkflowError> {
        let Some(id) = id else {
            return Ok(Err(FormState::BadRequest));
        };
        Ok(self
            .store
            .find_recording(id)
            .await?
            .ok_or(FormState::NotFound(id)))
    }

    async fn load_reference(&self) -> Result<ReferenceData, StoreError> {
        Ok(ReferenceData {
            artists: self.store.list_artists().await?,
            labels: self.store.list_labels().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    use super::*;
    use crate::recording::Track;
    use crate::reference::{CreateArtist, CreateLabel};
    use crate::store::MemoryCatalogStore;

    /// Store seeded with two artists, two labels and "Are You Experienced".
    async fn seeded() -> (MemoryCatalogStore, Recording) {
        let store = MemoryCatalogStore::new();
        let mut artists = Vec::new();
        for name in ["The Beatles", "Jimi Hendrix"] {
            artists.push(store.add_artist(&CreateArtist { name: name.into() }).await.unwrap());
        }
        let mut labels = Vec::new();
        for name in ["Track Record", "Parlophone"] {
            labels.push(store.add_label(&CreateLabel { name: name.into() }).await.unwrap());
        }

        let draft = RecordingDraft {
            title: "Are You Experienced".into(),
            release_date: NaiveDate::from_ymd_opt(1967, 5, 12),
            artist: artists[1].clone(),
            label: labels[0].clone(),
            tracks: vec![
                Track::new("Foxy Lady", 199),
                Track::new("Manic Depression", 210),
                Track::new("Red House", 224),
            ],
        };
        let id = store.add_recording(&draft).await.unwrap();
        (store, draft.with_id(id))
    }

    fn sgt_peppers() -> RecordingForm {
        RecordingForm {
            id: None,
            title: Some("Sgt. Peppers Lonely Hearts Club Band".into()),
            release_date: NaiveDate::from_ymd_opt(1967, 5, 26),
            track_titles: vec![
                "Sgt. Pepper's Lonely Hearts Club Band".into(),
                "With a Little Help from My Friends".into(),
                "Lucy in the Sky with Diamonds".into(),
            ],
            durations: vec![Some(122), Some(163), Some(208)],
            selected_artist_id: Some(1),
            selected_label_id: Some(2),
        }
    }

    #[tokio::test]
    async fn create_form_is_blank_with_reference_lists() {
        let (store, _) = seeded().await;
        let workflow = RecordingWorkflow::new(&store, Locale::En);

        let view = assert_matches!(workflow.create_form().await, Ok(FormState::Initial(v)) => v);
        assert_eq!(view.form.title, None);
        assert_eq!(view.form.selected_artist_id, None);
        assert_eq!(view.form.track_titles.len(), 1);
        assert_eq!(view.form.durations, vec![None]);
        assert!(view.errors.is_empty());
        assert_eq!(view.artists.len(), 2);
        assert_eq!(view.labels.len(), 2);
    }

    #[tokio::test]
    async fn valid_create_is_persisted_in_order() {
        let (store, _) = seeded().await;
        let workflow = RecordingWorkflow::new(&store, Locale::En);

        let id = assert_matches!(
            workflow.submit_create(sgt_peppers()).await,
            Ok(FormState::Persisted(id)) => id
        );
        let stored = store.find_recording(id).await.unwrap().unwrap();
        assert_eq!(stored.artist.name, "The Beatles");
        assert_eq!(stored.label.name, "Parlophone");
        assert_eq!(
            stored.tracks,
            vec![
                Track::new("Sgt. Pepper's Lonely Hearts Club Band", 122),
                Track::new("With a Little Help from My Friends", 163),
                Track::new("Lucy in the Sky with Diamonds", 208),
            ]
        );
    }

    #[tokio::test]
    async fn invalid_create_re_renders_submission_unchanged() {
        let (store, _) = seeded().await;
        let workflow = RecordingWorkflow::new(&store, Locale::En);
        let mut form = sgt_peppers();
        form.track_titles.push("New Song".into());
        form.durations.push(None);

        let view = assert_matches!(
            workflow.submit_create(form.clone()).await,
            Ok(FormState::ReRendered(v)) => v
        );
        assert_eq!(view.form, form);
        assert_eq!(view.errors.len(), 1);
        assert_eq!(view.errors.get("durations[3]"), ["duration required"]);
        assert_eq!(view.artists.len(), 2);
        assert_eq!(view.labels.len(), 2);
        assert_eq!(store.list_recordings().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unequal_track_lists_abort_instead_of_re_rendering() {
        let (store, _) = seeded().await;
        let workflow = RecordingWorkflow::new(&store, Locale::En);
        let mut form = sgt_peppers();
        form.track_titles.push("New Song".into());

        assert_matches!(
            workflow.submit_create(form).await,
            Err(WorkflowError::StructuralMismatch(StructuralMismatch {
                titles: 4,
                durations: 3
            }))
        );
    }

    #[tokio::test]
    async fn edit_form_guards() {
        let (store, _) = seeded().await;
        let workflow = RecordingWorkflow::new(&store, Locale::En);

        assert_matches!(workflow.edit_form(None).await, Ok(FormState::BadRequest));
        assert_matches!(workflow.edit_form(Some(0)).await, Ok(FormState::NotFound(0)));
    }

    #[tokio::test]
    async fn edit_form_is_populated_from_stored_recording() {
        let (store, initial) = seeded().await;
        let workflow = RecordingWorkflow::new(&store, Locale::En);

        let view = assert_matches!(
            workflow.edit_form(Some(initial.id)).await,
            Ok(FormState::Initial(v)) => v
        );
        assert_eq!(view.form.id, Some(initial.id));
        assert_eq!(view.form.title.as_deref(), Some("Are You Experienced"));
        assert_eq!(
            view.form.track_titles,
            vec!["Foxy Lady", "Manic Depression", "Red House"]
        );
        assert_eq!(view.form.durations, vec![Some(199), Some(210), Some(224)]);
        assert_eq!(view.form.selected_artist_id, Some(initial.artist.id));
        assert_eq!(view.form.selected_label_id, Some(initial.label.id));
    }

    #[tokio::test]
    async fn valid_edit_replaces_stored_recording() {
        let (store, initial) = seeded().await;
        let workflow = RecordingWorkflow::new(&store, Locale::En);
        let form = RecordingForm {
            id: Some(initial.id),
            ..sgt_peppers()
        };

        assert_matches!(
            workflow.submit_edit(form).await,
            Ok(FormState::Persisted(id)) if id == initial.id
        );
        let stored = store.find_recording(initial.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "Sgt. Peppers Lonely Hearts Club Band");
        assert_eq!(stored.tracks.len(), 3);
        assert_eq!(store.list_recordings().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn edit_submission_guards_run_before_validation() {
        let (store, _) = seeded().await;
        let workflow = RecordingWorkflow::new(&store, Locale::En);
        let invalid = RecordingForm {
            title: None,
            ..sgt_peppers()
        };

        assert_matches!(
            workflow.submit_edit(invalid.clone()).await,
            Ok(FormState::BadRequest)
        );
        assert_matches!(
            workflow
                .submit_edit(RecordingForm {
                    id: Some(99),
                    ..invalid
                })
                .await,
            Ok(FormState::NotFound(99))
        );
    }

    #[tokio::test]
    async fn invalid_edit_reports_localized_title_error() {
        let (store, initial) = seeded().await;
        let workflow = RecordingWorkflow::new(&store, Locale::Ja);
        let form = RecordingForm {
            id: Some(initial.id),
            title: Some(String::new()),
            ..sgt_peppers()
        };

        let view = assert_matches!(
            workflow.submit_edit(form).await,
            Ok(FormState::ReRendered(v)) => v
        );
        assert_eq!(view.errors.get("title"), ["タイトルに入力が必要です"]);
        assert_eq!(view.form.id, Some(initial.id));
        let stored = store.find_recording(initial.id).await.unwrap().unwrap();
        assert_eq!(stored, initial);
    }

    #[tokio::test]
    async fn advance_steps_one_transition_at_a_time() {
        let (store, _) = seeded().await;
        let workflow = RecordingWorkflow::new(&store, Locale::En);
        let form = RecordingFormModel::try_from(sgt_peppers()).unwrap();

        let state = workflow
            .advance(FormState::Submitted {
                target: Target::Create,
                form,
            })
            .await
            .unwrap();
        assert_matches!(&state, FormState::Valid { target: Target::Create, .. });
        assert!(!state.is_terminal());

        let state = workflow.advance(state).await.unwrap();
        assert_matches!(state, FormState::Persisted(_));
        let again = workflow.advance(state.clone()).await.unwrap();
        assert_eq!(again, state);
    }

    #[tokio::test]
    async fn details_flattens_stored_recording() {
        let (store, initial) = seeded().await;
        let workflow = RecordingWorkflow::new(&store, Locale::En);

        assert_matches!(workflow.details(None).await, Ok(DetailsOutcome::BadRequest));
        assert_matches!(workflow.details(Some(0)).await, Ok(DetailsOutcome::NotFound(0)));

        let details = assert_matches!(
            workflow.details(Some(initial.id)).await,
            Ok(DetailsOutcome::Found(d)) => d
        );
        assert_eq!(details.id, initial.id);
        assert_eq!(details.title, "Are You Experienced");
        assert_eq!(details.artist_name, "Jimi Hendrix");
        assert_eq!(details.label_name, "Track Record");
        assert_eq!(details.tracks, initial.tracks);
    }

    #[tokio::test]
    async fn index_lists_every_recording() {
        let (store, _) = seeded().await;
        let workflow = RecordingWorkflow::new(&store, Locale::En);
        assert_eq!(workflow.index().await.unwrap().len(), 1);

        store.delete_all().await.unwrap();
        assert!(workflow.index().await.unwrap().is_empty());
    }
}
