/// Generates a client method that sends one request and awaits its oneshot reply.
///
/// A closed channel or a dropped reply becomes
/// [`BookstoreError::ActorCommunicationError`](crate::error::BookstoreError).
/// Parameters listed in a trailing `skip(..)` are kept out of the span.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident $(, skip($($skipped:ident),+))?) => {
        #[allow(dead_code)]
        impl $client {
            #[tracing::instrument(skip(self $($(, $skipped)+)?))]
            pub async fn $method(&self, $($param: $param_type),*) -> $crate::error::BookstoreResult<$return_type> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| $crate::error::BookstoreError::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| $crate::error::BookstoreError::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}
