use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use car_registry::config::{DatabaseConfig, EnvironmentConfig};
use car_registry::{create_router, database, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    if let Err(e) = dotenv() {
        eprintln!("⚠️ No se pudo cargar .env: {}", e);
    }

    let env_config = EnvironmentConfig::from_env().context("Invalid server configuration")?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&env_config.log_filter)),
        )
        .init();

    info!("🚗 Car Registry - API de vehículos");
    info!("================================");

    // Inicializar base de datos
    let db_config = DatabaseConfig::from_env().context("Invalid database configuration")?;
    let pool = match database::create_pool(&db_config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {:#}", e);
            return Err(e);
        }
    };
    database::ensure_schema(&pool).await?;

    let app = create_router(AppState::with_pool(pool));

    let addr: SocketAddr = env_config
        .server_url()
        .parse()
        .with_context(|| format!("Invalid listen address {}", env_config.server_url()))?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /cars - Listar cars (regNum, mark, model, year, page, pageSize)");
    info!("   POST   /cars - Crear car");
    info!("   PUT    /cars/:id - Actualizar car");
    info!("   DELETE /cars/:id - Eliminar car");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Servidor terminó con error: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
