// 模块声明
mod command;
mod lifecycle;
mod manager;
mod types;

// 重新导出公共API
pub use types::StackManager;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::error::StackError;
    use crate::hosts::HostsFile;
    use crate::manifest::ComposeManifest;
    use crate::runner::testing::RecordingRunner;
    use crate::site::SiteName;
    use std::fs;
    use std::path::Path;
    use tempfile::{TempDir, tempdir};

    fn test_config(dir: &Path, use_sudo: bool) -> AppConfig {
        let mut config = AppConfig::default();
        config.stack.work_dir = dir.join("sites").to_string_lossy().to_string();
        config.hosts.file = dir.join("hosts").to_string_lossy().to_string();
        config.commands.use_sudo = use_sudo;
        config
    }

    fn manager_with(
        runner: RecordingRunner,
        config: &AppConfig,
    ) -> StackManager<RecordingRunner, HostsFile> {
        StackManager::with_parts(runner, HostsFile::new(config.get_hosts_file()), config)
    }

    fn setup(runner: RecordingRunner) -> (TempDir, StackManager<RecordingRunner, HostsFile>) {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path(), false);
        let manager = manager_with(runner, &config);
        (dir, manager)
    }

    fn site(name: &str) -> SiteName {
        SiteName::parse(name).unwrap()
    }

    #[test]
    fn test_paths() {
        let mut config = AppConfig::default();
        config.stack.work_dir = "/srv/lemp".to_string();
        let manager = StackManager::from_config(&config);

        assert_eq!(
            manager.manifest_path(&site("mysite")),
            Path::new("/srv/lemp/docker-compose-mysite.yml")
        );
        assert_eq!(manager.nginx_conf_path(), Path::new("/srv/lemp/nginx-conf"));
    }

    #[tokio::test]
    async fn test_create_writes_artifacts_and_starts_stack() {
        let (_dir, manager) = setup(RecordingRunner::new());
        let mysite = site("mysite");

        manager.create(&mysite).await.unwrap();

        let manifest_path = manager.manifest_path(&mysite);
        let content = fs::read_to_string(&manifest_path).unwrap();
        let manifest = ComposeManifest::from_yaml(&content).unwrap();
        assert_eq!(manifest.services.len(), 3);
        assert!(manifest.volumes.contains_key("mysite_wordpress"));
        assert!(manifest.networks.contains_key("mysite_network"));

        assert!(manager.nginx_conf_path().is_dir());
        assert!(manager.hosts().contains(&mysite).unwrap());

        assert_eq!(
            manager.runner().calls(),
            vec![format!(
                "docker-compose -f {} up -d",
                manifest_path.display()
            )]
        );
    }

    #[tokio::test]
    async fn test_create_overwrites_existing_manifest() {
        let (_dir, manager) = setup(RecordingRunner::new());
        let mysite = site("mysite");
        let manifest_path = manager.manifest_path(&mysite);

        fs::create_dir_all(manager.work_dir()).unwrap();
        fs::write(&manifest_path, "stale: true\n").unwrap();
        fs::create_dir_all(manager.nginx_conf_path()).unwrap();

        manager.create(&mysite).await.unwrap();

        let content = fs::read_to_string(&manifest_path).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.contains("mysite_db"));
    }

    #[tokio::test]
    async fn test_create_uses_sudo_when_configured() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path(), true);
        let manager = manager_with(RecordingRunner::new(), &config);
        let mysite = site("mysite");

        manager.create(&mysite).await.unwrap();

        let calls = manager.runner().calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].starts_with("sudo docker-compose -f "));
        assert!(calls[0].ends_with("docker-compose-mysite.yml up -d"));
    }

    #[tokio::test]
    async fn test_create_applies_manifest_config() {
        let dir = tempdir().unwrap();
        let mut config = test_config(dir.path(), false);
        config.manifest.http_port = 8080;
        config.manifest.php_image = "php:8.3-fpm".to_string();
        let manager = manager_with(RecordingRunner::new(), &config);
        let mysite = site("mysite");

        manager.create(&mysite).await.unwrap();

        let content = fs::read_to_string(manager.manifest_path(&mysite)).unwrap();
        let manifest = ComposeManifest::from_yaml(&content).unwrap();
        assert_eq!(manifest.services["nginx"].ports, vec!["8080:80"]);
        assert_eq!(manifest.services["php"].image, "php:8.3-fpm");
        assert_eq!(manifest.services["mysql"].image, "mysql:5.7");
    }

    #[tokio::test]
    async fn test_create_with_absolute_nginx_conf_dir() {
        let dir = tempdir().unwrap();
        let conf_dir = dir.path().join("shared").join("nginx");
        let mut config = test_config(dir.path(), false);
        config.stack.nginx_conf_dir = conf_dir.to_string_lossy().to_string();
        let manager = manager_with(RecordingRunner::new(), &config);
        let mysite = site("mysite");

        manager.create(&mysite).await.unwrap();

        assert_eq!(manager.nginx_conf_path(), conf_dir);
        assert!(conf_dir.is_dir());

        let content = fs::read_to_string(manager.manifest_path(&mysite)).unwrap();
        let manifest = ComposeManifest::from_yaml(&content).unwrap();
        assert!(
            manifest.services["nginx"]
                .volumes
                .contains(&format!("{}:/etc/nginx/conf.d", conf_dir.display()))
        );
    }

    #[tokio::test]
    async fn test_create_failure_leaves_partial_state() {
        let (_dir, manager) = setup(RecordingRunner::new().fail_on("up -d"));
        let mysite = site("mysite");

        let result = manager.create(&mysite).await;
        assert!(matches!(result, Err(StackError::CommandFailed { .. })));

        // 没有回滚
        assert!(manager.hosts().contains(&mysite).unwrap());
        assert!(manager.manifest_exists(&mysite));
        assert!(manager.nginx_conf_path().is_dir());
    }

    #[tokio::test]
    async fn test_create_then_delete_cleans_files_but_keeps_hosts_entry() {
        let (_dir, manager) = setup(RecordingRunner::new());
        let mysite = site("mysite");

        manager.create(&mysite).await.unwrap();
        manager.delete(&mysite).await.unwrap();

        assert!(!manager.manifest_exists(&mysite));
        assert!(!manager.nginx_conf_path().exists());
        assert!(manager.hosts().contains(&mysite).unwrap());

        let calls = manager.runner().calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[1].ends_with("docker-compose-mysite.yml down --volumes"));
    }

    #[tokio::test]
    async fn test_delete_removes_hosts_entry_when_configured() {
        let dir = tempdir().unwrap();
        let mut config = test_config(dir.path(), false);
        config.hosts.remove_on_delete = true;
        let manager = manager_with(RecordingRunner::new(), &config);
        let mysite = site("mysite");

        manager.create(&mysite).await.unwrap();
        manager.delete(&mysite).await.unwrap();

        assert!(!manager.hosts().contains(&mysite).unwrap());
    }

    #[tokio::test]
    async fn test_delete_aborts_when_down_fails() {
        let (_dir, manager) = setup(RecordingRunner::new().fail_on("down --volumes"));
        let mysite = site("mysite");

        manager.create(&mysite).await.unwrap();
        let result = manager.delete(&mysite).await;

        assert!(matches!(result, Err(StackError::CommandFailed { .. })));
        assert!(manager.manifest_exists(&mysite));
        assert!(manager.nginx_conf_path().is_dir());
    }

    #[tokio::test]
    async fn test_delete_tolerates_missing_conf_dir() {
        let (_dir, manager) = setup(RecordingRunner::new());
        let mysite = site("mysite");

        manager.create(&mysite).await.unwrap();
        fs::remove_dir_all(manager.nginx_conf_path()).unwrap();

        manager.delete(&mysite).await.unwrap();
        assert!(!manager.manifest_exists(&mysite));
    }

    #[tokio::test]
    async fn test_enable_disable_require_manifest() {
        let (_dir, manager) = setup(RecordingRunner::new());
        let ghost = site("ghost");

        assert!(matches!(
            manager.enable(&ghost).await,
            Err(StackError::ManifestNotFound(_))
        ));
        assert!(matches!(
            manager.disable(&ghost).await,
            Err(StackError::ManifestNotFound(_))
        ));
        assert!(matches!(
            manager.delete(&ghost).await,
            Err(StackError::ManifestNotFound(_))
        ));
        assert!(manager.runner().calls().is_empty());
    }

    #[tokio::test]
    async fn test_enable_and_disable_commands() {
        let (_dir, manager) = setup(RecordingRunner::new());
        let mysite = site("mysite");
        manager.create(&mysite).await.unwrap();

        manager.disable(&mysite).await.unwrap();
        manager.enable(&mysite).await.unwrap();

        let calls = manager.runner().calls();
        assert_eq!(calls.len(), 3);
        assert!(calls[1].ends_with("docker-compose-mysite.yml down"));
        assert!(calls[2].ends_with("docker-compose-mysite.yml up -d"));
        // disable 不删除任何文件
        assert!(manager.manifest_exists(&mysite));
    }

    #[tokio::test]
    async fn test_enable_propagates_compose_failure() {
        let (dir, manager) = setup(RecordingRunner::new());
        let mysite = site("mysite");
        manager.create(&mysite).await.unwrap();

        let failing = StackManager::with_parts(
            RecordingRunner::new().fail_on("up -d"),
            manager.hosts().clone(),
            &test_config(dir.path(), false),
        );
        assert!(matches!(
            failing.enable(&mysite).await,
            Err(StackError::CommandFailed { code: Some(1), .. })
        ));
    }
}
