use self::error::{Error, Result};
use async_trait::async_trait;
use std::{sync::Arc, time::Duration};
use tonic::{
    client::Grpc,
    codec::{CompressionEncoding, ProstCodec},
    codegen::http::uri::PathAndQuery,
    metadata::{Ascii, MetadataValue},
    transport::{Channel, ClientTlsConfig, Endpoint},
};
use tron_core::{debug, trace, warn};
use tron_rpc_core::{api::ops::RpcApiOps, api::rpc::RpcApi, error::RpcResult, model::*};

pub mod config;
pub mod error;
#[macro_use]
mod route;

pub use config::ClientConfig;

/// Request metadata carrying the API key. Header names travel lowercase.
pub const API_KEY_HEADER: &str = "tron-pro-api-key";

/// Wallet service client over a single gRPC channel.
///
/// Cloning is cheap and clones share the channel.
#[derive(Clone, Debug)]
pub struct GrpcClient {
    inner: Arc<Inner>,
}

impl GrpcClient {
    pub async fn connect(config: ClientConfig) -> Result<GrpcClient> {
        let inner = Inner::connect(&config).await?;
        Ok(Self { inner: Arc::new(inner) })
    }

    pub fn url(&self) -> &str {
        &self.inner.url
    }

    pub fn request_timeout(&self) -> Duration {
        self.inner.request_timeout
    }
}

#[async_trait]
impl RpcApi for GrpcClient {
    // this example illustrates the body of the function created by the route!() macro
    // async fn get_account(&self, request: Account) -> RpcResult<Account> {
    //     Ok(self.inner.call::<Account, Account>(RpcApiOps::GetAccount, request).await?)
    // }

    route!(GetAccount, Account, Account);
    route!(CreateTransaction, TransferContract, TransactionExtention);
    route!(BroadcastTransaction, Transaction, Return);
    route!(TriggerContract, TriggerSmartContract, TransactionExtention);
    route!(TriggerConstantContract, TriggerSmartContract, TransactionExtention);
    route!(DeployContract, CreateSmartContract, TransactionExtention);
    route!(GetContract, BytesMessage, SmartContract);
    route!(GetTransactionById, BytesMessage, Transaction);
}

#[derive(Debug)]
struct Inner {
    url: String,
    channel: Channel,
    api_key: Option<MetadataValue<Ascii>>,
    request_timeout: Duration,
}

impl Inner {
    async fn connect(config: &ClientConfig) -> Result<Self> {
        let address = config.endpoint_url()?;
        // parse the key before dialing so a bad key fails fast
        let api_key = config.api_key.as_deref().map(str::parse::<MetadataValue<Ascii>>).transpose()?;

        debug!("[GrpcClient] connecting to {}", config.url);
        let mut endpoint = Endpoint::from_shared(address)?
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .tcp_keepalive(Some(config.keep_alive()));
        if config.is_tls() {
            endpoint = endpoint.tls_config(ClientTlsConfig::new().with_webpki_roots())?;
        }
        let channel = endpoint.connect().await.inspect_err(|err| warn!("[GrpcClient] cannot connect to {}: {err}", config.url))?;
        debug!("[GrpcClient] connected to {}", config.url);

        Ok(Self { url: config.url.clone(), channel, api_key, request_timeout: config.request_timeout() })
    }

    async fn call<Req, Resp>(&self, op: RpcApiOps, request: Req) -> Result<Resp>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        trace!("[GrpcClient] {op} request: {:?}", request);
        let mut request = tonic::Request::new(request);
        if let Some(api_key) = &self.api_key {
            request.metadata_mut().insert(API_KEY_HEADER, api_key.clone());
        }

        let mut grpc = Grpc::new(self.channel.clone()).accept_compressed(CompressionEncoding::Gzip);
        let unary = async move {
            grpc.ready().await.map_err(|err| tonic::Status::unknown(format!("Service was not ready: {err}")))?;
            let codec = ProstCodec::<Req, Resp>::default();
            grpc.unary(request, PathAndQuery::from_static(op.path()), codec).await
        };

        // dropping the future on expiry cancels the in-flight request
        match tokio::time::timeout(self.request_timeout, unary).await {
            Ok(Ok(response)) => {
                let response = response.into_inner();
                trace!("[GrpcClient] {op} response: {:?}", response);
                Ok(response)
            }
            Ok(Err(status)) => {
                debug!("[GrpcClient] {op} failed: {status}");
                Err(Error::TonicStatus(status))
            }
            Err(_) => {
                debug!("[GrpcClient] {op} timed out after {:?}", self.request_timeout);
                Err(Error::Timeout)
            }
        }
    }
}
