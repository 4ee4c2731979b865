/// Generates a client method that sends one request variant and awaits its
/// reply, with tracing and mailbox errors mapped to the client's error type.
#[macro_export]
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                tracing::debug!("Sending request");
                $crate::actor_framework::request(&self.sender, |respond_to| $request::$variant {
                    $($param,)*
                    respond_to,
                })
                .await
                .map_err(<$error_type>::from)
            }
        }
    };
}
