/// Implements one [`RpcApi`](tron_rpc_core::RpcApi) method as a unary call on the op's path.
///
/// The method name is the snake case form of the op. The body is written in the
/// desugared `async_trait` form so the macro can expand inside an `#[async_trait]` impl.
macro_rules! route {
    ($op:ident, $request:ty, $response:ty) => {
        paste::paste! {
            fn [<$op:snake>]<'life0, 'async_trait>(
                &'life0 self,
                request: $request,
            ) -> ::core::pin::Pin<Box<dyn ::core::future::Future<Output = RpcResult<$response>> + ::core::marker::Send + 'async_trait>>
            where
                'life0: 'async_trait,
                Self: 'async_trait,
            {
                Box::pin(async move { Ok(self.inner.call::<$request, $response>(RpcApiOps::$op, request).await?) })
            }
        }
    };
}
