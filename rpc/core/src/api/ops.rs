use std::fmt::{Display, Formatter};

/// GRPC service implementing every op.
pub const WALLET_SERVICE: &str = "protocol.Wallet";

macro_rules! rpc_api_ops {
    ($($op:ident => $method:literal),+ $(,)?) => {
        /// Wallet service methods the client issues.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u32)]
        pub enum RpcApiOps {
            $($op,)+
        }

        impl RpcApiOps {
            pub const ALL: &'static [RpcApiOps] = &[$(RpcApiOps::$op,)+];

            /// Method name as declared by the service.
            pub fn method(&self) -> &'static str {
                match self {
                    $(RpcApiOps::$op => $method,)+
                }
            }

            /// Full request path, `/protocol.Wallet/<Method>`.
            pub fn path(&self) -> &'static str {
                match self {
                    $(RpcApiOps::$op => concat!("/protocol.Wallet/", $method),)+
                }
            }
        }
    };
}

rpc_api_ops! {
    GetAccount => "GetAccount",
    // the v2 variant returns a TransactionExtention
    CreateTransaction => "CreateTransaction2",
    BroadcastTransaction => "BroadcastTransaction",
    TriggerContract => "TriggerContract",
    TriggerConstantContract => "TriggerConstantContract",
    DeployContract => "DeployContract",
    GetContract => "GetContract",
    GetTransactionById => "GetTransactionById",
}

impl From<RpcApiOps> for u32 {
    fn from(item: RpcApiOps) -> Self {
        item as u32
    }
}

impl TryFrom<u32> for RpcApiOps {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        RpcApiOps::ALL.get(value as usize).copied().ok_or(value)
    }
}

impl Display for RpcApiOps {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.method())
    }
}
