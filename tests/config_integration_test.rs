//! Integration tests for credentials loading and validation
//!
//! Tests touching environment variables hold `ENV_MUTEX`.

use abs_metadata::config::{load_config, load_credentials};
use abs_metadata::domain::MetadataError;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    std::env::remove_var("ABS_COSMOS_DB_KEY");
    std::env::remove_var("ABS_AZURE_BLOCKCHAIN_MEMBER_NAME");
    std::env::remove_var("TEST_ABS_COSMOS_KEY");
}

fn credentials_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const COMPLETE: &str = "\
# Azure Blockchain Service
AZURE_SUBSCRIPTION_ID=00000000-0000-0000-0000-000000000000
AZURE_RESOURCE_GROUP_NAME = rg-blockchain
AZURE_BLOCKCHAIN_MEMBER_NAME=contosomember

COSMOS_DB_ENDPOINT=https://contoso.documents.azure.com:443/
COSMOS_DB_KEY=a2V5PT1zZWNyZXQ=
COSMOS_DB_DATABASE_NAME=blockchain
COSMOS_DB_CONTAINER_NAME=contracts
";

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = credentials_file(COMPLETE);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.azure.resource_group_name, "rg-blockchain");
    assert_eq!(config.azure.blockchain_member_name, "contosomember");
    assert_eq!(config.azure.management_endpoint, "https://management.azure.com");
    assert!(config.azure.service_principal().is_none());

    let cosmosdb = config.cosmosdb.expect("cosmos settings present");
    assert_eq!(cosmosdb.container_name, "contracts");
    assert_eq!(cosmosdb.key.expose_secret(), "a2V5PT1zZWNyZXQ=");
}

#[test]
fn test_value_split_on_first_equals() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = credentials_file(COMPLETE);
    let credentials = load_credentials(file.path()).unwrap();
    assert_eq!(credentials.get("COSMOS_DB_KEY"), Some("a2V5PT1zZWNyZXQ="));
}

#[test]
fn test_missing_cosmos_keys_disable_contracts() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = credentials_file(
        "AZURE_SUBSCRIPTION_ID=sub\n\
         AZURE_RESOURCE_GROUP_NAME=rg\n\
         AZURE_BLOCKCHAIN_MEMBER_NAME=member\n\
         COSMOS_DB_ENDPOINT=https://contoso.documents.azure.com:443/\n",
    );
    let config = load_config(file.path()).unwrap();
    assert!(config.cosmosdb.is_none());
}

#[test]
fn test_missing_required_key_is_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = credentials_file("AZURE_SUBSCRIPTION_ID=sub\nAZURE_RESOURCE_GROUP_NAME=rg\n");
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, MetadataError::Configuration(_)));
    assert!(err.to_string().contains("AZURE_BLOCKCHAIN_MEMBER_NAME"));
}

#[test]
fn test_missing_file_is_error() {
    let err = load_config("/nonexistent/credentials.txt").unwrap_err();
    assert!(matches!(err, MetadataError::Configuration(_)));
}

#[test]
fn test_env_substitution_and_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    std::env::set_var("TEST_ABS_COSMOS_KEY", "from-substitution");
    let file = credentials_file(&COMPLETE.replace(
        "COSMOS_DB_KEY=a2V5PT1zZWNyZXQ=",
        "COSMOS_DB_KEY=${TEST_ABS_COSMOS_KEY}",
    ));

    let config = load_config(file.path()).unwrap();
    assert_eq!(
        config.cosmosdb.as_ref().unwrap().key.expose_secret(),
        "from-substitution"
    );

    std::env::set_var("ABS_AZURE_BLOCKCHAIN_MEMBER_NAME", "overridden");
    std::env::set_var("ABS_COSMOS_DB_KEY", "from-override");
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.azure.blockchain_member_name, "overridden");
    assert_eq!(
        config.cosmosdb.as_ref().unwrap().key.expose_secret(),
        "from-override"
    );

    cleanup_env_vars();
}

#[test]
fn test_line_without_separator_is_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = credentials_file("AZURE_SUBSCRIPTION_ID=sub\nnot a pair\n");
    assert!(load_credentials(file.path()).is_err());
}

#[test]
fn test_plain_http_cosmos_endpoint_disables_contracts() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = credentials_file(&COMPLETE.replace(
        "https://contoso.documents.azure.com:443/",
        "http://localhost:8081/",
    ));
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.azure.blockchain_member_name, "contosomember");
    assert!(config.cosmosdb.is_none());
}

#[test]
fn test_unset_cosmos_variable_filled_by_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = credentials_file(&COMPLETE.replace(
        "COSMOS_DB_KEY=a2V5PT1zZWNyZXQ=",
        "COSMOS_DB_KEY=${TEST_ABS_COSMOS_KEY}",
    ));
    let config = load_config(file.path()).unwrap();
    assert!(config.cosmosdb.is_none());

    std::env::set_var("ABS_COSMOS_DB_KEY", "from-override");
    let config = load_config(file.path()).unwrap();
    assert_eq!(
        config.cosmosdb.as_ref().unwrap().key.expose_secret(),
        "from-override"
    );

    cleanup_env_vars();
}

#[test]
fn test_unset_azure_variable_is_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = credentials_file(&COMPLETE.replace(
        "AZURE_BLOCKCHAIN_MEMBER_NAME=contosomember",
        "AZURE_BLOCKCHAIN_MEMBER_NAME=${TEST_ABS_COSMOS_KEY}",
    ));
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_ABS_COSMOS_KEY"));
}
