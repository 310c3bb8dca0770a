//! Team service: the business rules for teams

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::team::{validate_team_name, TeamValidationError};
use crate::domain::validation::validate_id;
use crate::domain::{
    DeleteConfirmation, DomainError, NewTeam, Page, PageRequest, Team, TeamId, TeamRepository,
};

/// Request for creating a new team
#[derive(Debug, Clone, Default)]
pub struct CreateTeamRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Request for updating a team; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateTeamRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateTeamRequest {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

fn team_not_found(id: i64) -> DomainError {
    DomainError::not_found(format!("No se encontró el team con ID {}", id))
}

/// Team service for managing teams
#[derive(Clone)]
pub struct TeamService {
    repository: Arc<dyn TeamRepository>,
}

impl TeamService {
    /// Create a new team service
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        Self { repository }
    }

    /// Create a new team
    pub async fn create(&self, request: CreateTeamRequest) -> Result<Team, DomainError> {
        info!(name = %request.name, "Creating team");

        let team = NewTeam::new(&request.name)?.with_description(request.description.as_deref());

        if self.repository.exists_by_name(team.name()).await? {
            return Err(TeamValidationError::DuplicateName(team.name().to_string()).into());
        }

        let team = self.repository.create(team).await?;
        info!(id = %team.id(), name = %team.name(), "Team created");

        Ok(team)
    }

    /// Get a team by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Team, DomainError> {
        validate_id(id)?;

        self.repository
            .get(TeamId::new(id))
            .await?
            .ok_or_else(|| team_not_found(id))
    }

    /// Get a team by its exact name
    pub async fn get_by_name(&self, name: &str) -> Result<Team, DomainError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(TeamValidationError::MissingSearchName.into());
        }

        self.repository.get_by_name(name).await?.ok_or_else(|| {
            DomainError::not_found(format!("No se encontró el team con nombre '{}'", name))
        })
    }

    /// List teams, newest first
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Page<Team>, DomainError> {
        let request = PageRequest::new(offset, limit)?;
        debug!(offset, limit, "Listing teams");

        let total = self.repository.count().await?;
        let items = self.repository.list(request).await?;

        Ok(Page::new(items, total, request))
    }

    /// Update a team
    pub async fn update(&self, id: i64, request: UpdateTeamRequest) -> Result<Team, DomainError> {
        info!(id, "Updating team");
        validate_id(id)?;

        let mut team = self
            .repository
            .get(TeamId::new(id))
            .await?
            .ok_or_else(|| team_not_found(id))?;

        if request.is_empty() {
            return Err(TeamValidationError::NothingToUpdate.into());
        }

        if let Some(name) = request.name.as_deref() {
            let name = validate_team_name(name)?;

            if let Some(other) = self.repository.get_by_name(&name).await? {
                if other.id() != team.id() {
                    return Err(TeamValidationError::NameTakenByOther(name).into());
                }
            }

            team.set_name(&name)?;
        }

        if let Some(description) = request.description.as_deref() {
            team.set_description(description);
        }

        self.repository
            .update(&team)
            .await?
            .ok_or_else(|| team_not_found(id))
    }

    /// Delete a team along with its heroes
    pub async fn delete(&self, id: i64) -> Result<DeleteConfirmation, DomainError> {
        info!(id, "Deleting team");
        validate_id(id)?;

        let team = self
            .repository
            .get(TeamId::new(id))
            .await?
            .ok_or_else(|| team_not_found(id))?;

        if !self.repository.delete(team.id()).await? {
            return Err(team_not_found(id));
        }

        Ok(DeleteConfirmation::new(
            format!("Team '{}' eliminado exitosamente", team.name()),
            id,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::MockTeamRepository;
    use crate::infrastructure::storage::InMemoryDatabase;
    use crate::infrastructure::team::InMemoryTeamRepository;
    use chrono::Utc;

    fn create_service() -> TeamService {
        let db = Arc::new(InMemoryDatabase::new());
        TeamService::new(Arc::new(InMemoryTeamRepository::new(db)))
    }

    fn create_request(name: &str) -> CreateTeamRequest {
        CreateTeamRequest {
            name: name.to_string(),
            description: None,
        }
    }

    fn messages(err: &DomainError, field: &str) -> Vec<String> {
        err.field_messages(field).map(<[String]>::to_vec).unwrap_or_default()
    }

    #[tokio::test]
    async fn test_create_team() {
        let service = create_service();

        let team = service
            .create(CreateTeamRequest {
                name: "  Justice League ".to_string(),
                description: Some(" Los héroes más poderosos ".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(team.id().value(), 1);
        assert_eq!(team.name(), "Justice League");
        assert_eq!(team.description(), Some("Los héroes más poderosos"));
    }

    #[tokio::test]
    async fn test_create_team_invalid_name() {
        let service = create_service();

        let err = service.create(create_request("   ")).await.unwrap_err();
        assert_eq!(
            messages(&err, "nombre"),
            vec!["El nombre del team es requerido y no puede estar vacío"]
        );

        let err = service
            .create(create_request(&"a".repeat(256)))
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_create_duplicate_team() {
        let service = create_service();
        service.create(create_request("Avengers")).await.unwrap();

        let err = service.create(create_request(" Avengers ")).await.unwrap_err();
        assert_eq!(
            messages(&err, "nombre"),
            vec!["Ya existe un team con el nombre 'Avengers'"]
        );

        // Case-sensitive
        assert!(service.create(create_request("avengers")).await.is_ok());
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let service = create_service();
        let created = service.create(create_request("Avengers")).await.unwrap();

        let team = service.get_by_id(created.id().value()).await.unwrap();
        assert_eq!(team, created);

        let err = service.get_by_id(0).await.unwrap_err();
        assert!(err.field_messages("id").is_some());

        let err = service.get_by_id(77).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found: No se encontró el team con ID 77");
    }

    #[tokio::test]
    async fn test_get_by_name() {
        let service = create_service();
        service.create(create_request("X-Men")).await.unwrap();

        assert_eq!(service.get_by_name(" X-Men ").await.unwrap().name(), "X-Men");
        assert!(service.get_by_name("x-men").await.unwrap_err().is_not_found());

        let err = service.get_by_name("  ").await.unwrap_err();
        assert_eq!(
            messages(&err, "nombre"),
            vec!["El nombre del team es requerido para la búsqueda"]
        );
    }

    #[tokio::test]
    async fn test_list_teams() {
        let service = create_service();
        for name in ["a", "b", "c"] {
            service.create(create_request(name)).await.unwrap();
        }

        let page = service.list(0, 2).await.unwrap();
        assert_eq!(page.total, 3);
        assert!(page.has_next);
        assert!(!page.has_previous);
        let names: Vec<&str> = page.items.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["c", "b"]);

        let page = service.list(2, 2).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert!(!page.has_next);
        assert!(page.has_previous);
    }

    #[tokio::test]
    async fn test_list_invalid_window() {
        let service = create_service();

        assert!(service.list(-1, 10).await.unwrap_err().field_messages("offset").is_some());
        assert!(service.list(0, 0).await.unwrap_err().field_messages("limit").is_some());
        assert!(service.list(0, 101).await.unwrap_err().field_messages("limit").is_some());
    }

    #[tokio::test]
    async fn test_update_team() {
        let service = create_service();
        let team = service.create(create_request("Avengers")).await.unwrap();
        let id = team.id().value();

        let updated = service
            .update(
                id,
                UpdateTeamRequest {
                    name: None,
                    description: Some("Earth's mightiest".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name(), "Avengers");
        assert_eq!(updated.description(), Some("Earth's mightiest"));

        // Renaming to its own name is allowed
        let renamed = service
            .update(
                id,
                UpdateTeamRequest {
                    name: Some(" Avengers ".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.name(), "Avengers");
        assert_eq!(renamed.description(), Some("Earth's mightiest"));
    }

    #[tokio::test]
    async fn test_update_team_errors() {
        let service = create_service();
        service.create(create_request("Avengers")).await.unwrap();
        let titans = service.create(create_request("Titans")).await.unwrap();
        let id = titans.id().value();

        let err = service.update(0, UpdateTeamRequest::default()).await.unwrap_err();
        assert!(err.field_messages("id").is_some());

        let err = service.update(99, UpdateTeamRequest::default()).await.unwrap_err();
        assert!(err.is_not_found());

        let err = service.update(id, UpdateTeamRequest::default()).await.unwrap_err();
        assert_eq!(
            messages(&err, "detail"),
            vec!["Debe proporcionar al menos un campo para actualizar (nombre o descripcion)"]
        );

        let err = service
            .update(
                id,
                UpdateTeamRequest {
                    name: Some("Avengers".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(
            messages(&err, "nombre"),
            vec!["Ya existe otro team con el nombre 'Avengers'"]
        );

        let err = service
            .update(
                id,
                UpdateTeamRequest {
                    name: Some("".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap_err();
        assert!(err.field_messages("nombre").is_some());

        assert_eq!(service.get_by_id(id).await.unwrap().name(), "Titans");
    }

    #[tokio::test]
    async fn test_delete_team() {
        let service = create_service();
        let team = service.create(create_request("Avengers")).await.unwrap();
        let id = team.id().value();

        let confirmation = service.delete(id).await.unwrap();
        assert_eq!(confirmation.message, "Team 'Avengers' eliminado exitosamente");
        assert_eq!(confirmation.id, id);

        assert!(service.get_by_id(id).await.unwrap_err().is_not_found());
        assert!(service.delete(id).await.unwrap_err().is_not_found());
        assert!(service.delete(-3).await.unwrap_err().is_validation());
    }

    #[tokio::test]
    async fn test_duplicate_never_reaches_create() {
        let mut repo = MockTeamRepository::new();
        repo.expect_exists_by_name().returning(|_| Ok(true));
        repo.expect_create().never();

        let service = TeamService::new(Arc::new(repo));
        let err = service.create(create_request("Avengers")).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_rejected_rename_never_reaches_update() {
        let now = Utc::now();
        let mut repo = MockTeamRepository::new();
        repo.expect_get()
            .returning(move |id| Ok(Some(Team::from_parts(id, "Titans".into(), None, now))));
        repo.expect_get_by_name().returning(move |name| {
            Ok(Some(Team::from_parts(TeamId::new(2), name.to_string(), None, now)))
        });
        repo.expect_update().never();

        let service = TeamService::new(Arc::new(repo));
        let err = service
            .update(
                1,
                UpdateTeamRequest {
                    name: Some("Avengers".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_storage_errors_propagate() {
        let mut repo = MockTeamRepository::new();
        repo.expect_count()
            .returning(|| Err(DomainError::storage("connection reset")));

        let service = TeamService::new(Arc::new(repo));
        let err = service.list(0, 10).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage { .. }));
    }
}
