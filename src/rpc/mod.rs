//! gRPC client side of the authentication authority.

pub mod auth_client;
pub mod proto;
pub mod role;
pub mod status;
pub mod user_client;

use std::time::Duration;

use tonic::{
    client::Grpc,
    codec::ProstCodec,
    codegen::http::uri::PathAndQuery,
    metadata::{MetadataMap, MetadataValue},
    transport::{Channel, Endpoint},
    GrpcMethod, Request,
};
use tracing::info;

use crate::error::GatewayError;

pub use auth_client::{AuthClient, GrpcAuthClient};
pub use user_client::{GrpcUserClient, UserClient};

/// Opens the channel shared by every authority client.
///
/// Fails when the authority cannot be reached, so a misconfigured process
/// never starts serving.
pub async fn connect(url: &str, rpc_timeout: Duration) -> anyhow::Result<Channel> {
    let channel = Endpoint::from_shared(url.to_string())?
        .connect_timeout(Duration::from_secs(5))
        .timeout(rpc_timeout)
        .connect()
        .await?;
    info!(url, "Authority gRPC channel connected");
    Ok(channel)
}

/// Per-request caller details forwarded to the authority as metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallContext {
    pub user_agent: Option<String>,
    pub client_ip: Option<String>,
}

impl CallContext {
    pub const USER_AGENT_KEY: &'static str = "x-user-agent";
    pub const CLIENT_IP_KEY: &'static str = "x-client-ip";

    fn apply(&self, metadata: &mut MetadataMap) {
        let pairs = [
            (Self::USER_AGENT_KEY, &self.user_agent),
            (Self::CLIENT_IP_KEY, &self.client_ip),
        ];
        for (key, value) in pairs {
            // Values that are not valid ASCII metadata are dropped.
            if let Some(value) = value.as_deref().and_then(|v| MetadataValue::try_from(v).ok()) {
                metadata.insert(key, value);
            }
        }
    }
}

/// Unary-call plumbing shared by the generated-style clients below.
#[derive(Debug, Clone)]
pub(crate) struct RpcChannel {
    inner: Grpc<Channel>,
}

impl RpcChannel {
    pub(crate) fn new(channel: Channel) -> Self {
        Self {
            inner: Grpc::new(channel),
        }
    }

    pub(crate) async fn unary<Req, Resp>(
        &self,
        ctx: &CallContext,
        service: &'static str,
        method: &'static str,
        path: &'static str,
        message: Req,
    ) -> Result<Resp, GatewayError>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        let mut grpc = self.inner.clone();
        grpc.ready().await.map_err(|e| status::translate(&e))?;

        let mut request = Request::new(message);
        ctx.apply(request.metadata_mut());
        request
            .extensions_mut()
            .insert(GrpcMethod::new(service, method));

        let codec: ProstCodec<Req, Resp> = ProstCodec::default();
        grpc.unary(request, PathAndQuery::from_static(path), codec)
            .await
            .map(tonic::Response::into_inner)
            .map_err(|status| status::translate(&status))
    }
}
