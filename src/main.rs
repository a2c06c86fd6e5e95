use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ride_ledger::config::environment::EnvironmentConfig;
use ride_ledger::routes::create_router;
use ride_ledger::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🚕 Ride Ledger - registro de vehículos y viajes");
    info!("================================================");
    info!("🔑 Identidad privilegiada: {}", config.contract_owner);
    info!("⛓️ Altura génesis: {}", config.genesis_height);

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_router(AppState::new(config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   POST /api/contracts/:contract/invoke - Llamada de contrato (vehicles | rides)");
    info!("🚗 Vehicle:");
    info!("   POST /api/vehicle - Registrar vehículo");
    info!("   GET  /api/vehicle/:id - Obtener vehículo");
    info!("   PUT  /api/vehicle/:id/status - Cambiar estado");
    info!("   GET  /api/vehicle/plate/:plate - Buscar por matrícula");
    info!("   GET  /api/vehicle/owner/:owner - Vehículos de un dueño");
    info!("🧭 Ride:");
    info!("   POST /api/ride - Solicitar viaje");
    info!("   GET  /api/ride/:id - Obtener viaje");
    info!("   POST /api/ride/:id/accept | start | complete | cancel");
    info!("   GET  /api/ride/passenger/:passenger - Viajes de un pasajero");
    info!("   GET  /api/ride/vehicle/:vehicle_id - Viajes de un vehículo");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
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
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
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
