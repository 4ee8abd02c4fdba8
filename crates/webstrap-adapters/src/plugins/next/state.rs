//! State-management bundles for the meta-framework flavor.
//!
//! The app router renders server components by default; every provider
//! lives in a dedicated `"use client"` wrapper component which the layout
//! splice wraps around the `body` children.

use webstrap_core::domain::{
    DependencySpec, EntryPatch, FileCategory, FileContent, FileSpec, LayoutSplice, PageInfo,
    PluginBundle, TemplateContext,
};

// ── react-query ───────────────────────────────────────────────────────────────

fn query_providers(ctx: &TemplateContext) -> String {
    let children_type = if ctx.typed {
        "{ children }: { children: React.ReactNode }"
    } else {
        "{ children }"
    };
    format!(
        r#""use client";

import {{ QueryClient, QueryClientProvider }} from "@tanstack/react-query";
import {{ ReactQueryDevtools }} from "@tanstack/react-query-devtools";
import React from "react";

const queryClient = new QueryClient({{
  defaultOptions: {{
    queries: {{
      refetchOnWindowFocus: true,
      retry: 3,
      staleTime: 3 * 1000 * 1000,
    }},
  }},
}});

export default function QueryProviders({children_type}) {{
  return (
    <QueryClientProvider client={{queryClient}}>
      {{children}}
      <ReactQueryDevtools />
    </QueryClientProvider>
  );
}}
"#
    )
}

pub fn react_query() -> PluginBundle {
    PluginBundle {
        initializing_message: Some("Adding React Query, Please wait !"),
        success_message: Some("Successfully added React Query with a client provider !"),
        files: vec![FileSpec {
            dir: &["src", "providers"],
            name: "QueryProviders",
            category: FileCategory::Component,
            content: FileContent::Render(query_providers),
        }],
        dependencies: Some(DependencySpec::Literal(
            "@tanstack/react-query @tanstack/react-query-devtools axios",
        )),
        entry_patch: Some(EntryPatch {
            layout: Some(LayoutSplice {
                anchor: "body",
                imports: "import QueryProviders from \"@/providers/QueryProviders\";",
                before: "<QueryProviders>",
                after: "</QueryProviders>",
            }),
            page: Some(PageInfo {
                route: "/",
                label: "React Query",
            }),
            ..Default::default()
        }),
        ..PluginBundle::named("react-query")
    }
}

// ── rtk-query + redux ─────────────────────────────────────────────────────────

fn store_module(ctx: &TemplateContext) -> String {
    let type_exports = if ctx.typed {
        r#"
export type AppStore = ReturnType<typeof makeStore>;
export type RootState = ReturnType<AppStore["getState"]>;
export type AppDispatch = AppStore["dispatch"];
"#
    } else {
        ""
    };

    format!(
        r#"import {{ configureStore }} from "@reduxjs/toolkit";
import {{ postsApi }} from "@/services/postsApi";

export const makeStore = () =>
  configureStore({{
    reducer: {{
      [postsApi.reducerPath]: postsApi.reducer,
    }},
    middleware: getDefaultMiddleware =>
      getDefaultMiddleware().concat(postsApi.middleware),
  }});
{type_exports}"#
    )
}

fn posts_api(ctx: &TemplateContext) -> String {
    let post_type = if ctx.typed {
        r#"
export type Post = {
  userId: number;
  id: number;
  title: string;
  body: string;
};
"#
    } else {
        ""
    };
    let generics = if ctx.typed { "<Post[], void>" } else { "" };

    format!(
        r#"import {{ createApi, fetchBaseQuery }} from "@reduxjs/toolkit/query/react";
{post_type}
export const postsApi = createApi({{
  reducerPath: "postsApi",
  baseQuery: fetchBaseQuery({{
    baseUrl: "https://jsonplaceholder.typicode.com/",
  }}),
  endpoints: builder => ({{
    getPosts: builder.query{generics}({{
      query: () => "posts",
    }}),
  }}),
}});

export const {{ useGetPostsQuery }} = postsApi;
"#
    )
}

fn store_provider(ctx: &TemplateContext) -> String {
    let (ref_type, children_type) = if ctx.typed {
        (
            "useRef<AppStore | null>(null)",
            "{ children }: { children: React.ReactNode }",
        )
    } else {
        ("useRef(null)", "{ children }")
    };
    let store_import = if ctx.typed {
        "import { makeStore, AppStore } from \"@/store/store\";"
    } else {
        "import { makeStore } from \"@/store/store\";"
    };

    format!(
        r#""use client";

import {{ useRef }} from "react";
import {{ Provider }} from "react-redux";
{store_import}

export default function StoreProvider({children_type}) {{
  const storeRef = {ref_type};
  if (!storeRef.current) {{
    storeRef.current = makeStore();
  }}

  return <Provider store={{storeRef.current}}>{{children}}</Provider>;
}}
"#
    )
}

pub fn rtk_query() -> PluginBundle {
    PluginBundle {
        initializing_message: Some("Adding RTK Query with Redux, Please wait !"),
        success_message: Some("Successfully added RTK Query with a store provider !"),
        files: vec![
            FileSpec {
                dir: &["src", "store"],
                name: "store",
                category: FileCategory::Module,
                content: FileContent::Render(store_module),
            },
            FileSpec {
                dir: &["src", "services"],
                name: "postsApi",
                category: FileCategory::Module,
                content: FileContent::Render(posts_api),
            },
            FileSpec {
                dir: &["src", "providers"],
                name: "StoreProvider",
                category: FileCategory::Component,
                content: FileContent::Render(store_provider),
            },
        ],
        dependencies: Some(DependencySpec::Literal("@reduxjs/toolkit react-redux")),
        entry_patch: Some(EntryPatch {
            layout: Some(LayoutSplice {
                anchor: "body",
                imports: "import StoreProvider from \"@/providers/StoreProvider\";",
                before: "<StoreProvider>",
                after: "</StoreProvider>",
            }),
            page: Some(PageInfo {
                route: "/",
                label: "RTK Query",
            }),
            ..Default::default()
        }),
        ..PluginBundle::named("rtk-query-redux")
    }
}

// ── apollo graphql ────────────────────────────────────────────────────────────

fn apollo_wrapper(ctx: &TemplateContext) -> String {
    let children_type = if ctx.typed {
        "{ children }: { children: React.ReactNode }"
    } else {
        "{ children }"
    };
    format!(
        r#""use client";

import {{ ApolloClient, ApolloProvider, InMemoryCache }} from "@apollo/client";
import React from "react";

const client = new ApolloClient({{
  uri: "https://graphqlzero.almansi.me/api",
  cache: new InMemoryCache(),
}});

export default function ApolloWrapper({children_type}) {{
  return <ApolloProvider client={{client}}>{{children}}</ApolloProvider>;
}}
"#
    )
}

pub fn graphql() -> PluginBundle {
    PluginBundle {
        initializing_message: Some("Adding Apollo GraphQL Client, Please wait !"),
        success_message: Some("Successfully added Apollo Client with a client wrapper !"),
        files: vec![FileSpec {
            dir: &["src", "providers"],
            name: "ApolloWrapper",
            category: FileCategory::Component,
            content: FileContent::Render(apollo_wrapper),
        }],
        dependencies: Some(DependencySpec::Literal("@apollo/client graphql")),
        entry_patch: Some(EntryPatch {
            layout: Some(LayoutSplice {
                anchor: "body",
                imports: "import ApolloWrapper from \"@/providers/ApolloWrapper\";",
                before: "<ApolloWrapper>",
                after: "</ApolloWrapper>",
            }),
            page: Some(PageInfo {
                route: "/",
                label: "Apollo GraphQL",
            }),
            ..Default::default()
        }),
        ..PluginBundle::named("graphql")
    }
}

// ── redux-thunk + axios ───────────────────────────────────────────────────────

fn thunk_slice(ctx: &TemplateContext) -> String {
    let state_type = if ctx.typed {
        r#"
type Post = { userId: number; id: number; title: string; body: string };

type PostsState = {
  items: Post[];
  loading: boolean;
};

const initialState: PostsState = { items: [], loading: false };
"#
    } else {
        r#"
const initialState = { items: [], loading: false };
"#
    };

    format!(
        r#"import {{ createAsyncThunk, createSlice }} from "@reduxjs/toolkit";
import axios from "axios";
{state_type}
export const fetchPosts = createAsyncThunk("posts/fetch", async () => {{
  const response = await axios.get(
    "https://jsonplaceholder.typicode.com/posts"
  );
  return response.data;
}});

const postsSlice = createSlice({{
  name: "posts",
  initialState,
  reducers: {{}},
  extraReducers: builder => {{
    builder
      .addCase(fetchPosts.pending, state => {{
        state.loading = true;
      }})
      .addCase(fetchPosts.fulfilled, (state, action) => {{
        state.items = action.payload;
        state.loading = false;
      }});
  }},
}});

export default postsSlice.reducer;
"#
    )
}

fn thunk_store(ctx: &TemplateContext) -> String {
    let type_exports = if ctx.typed {
        r#"
export type AppStore = ReturnType<typeof makeStore>;
export type RootState = ReturnType<AppStore["getState"]>;
export type AppDispatch = AppStore["dispatch"];
"#
    } else {
        ""
    };

    format!(
        r#"import {{ configureStore }} from "@reduxjs/toolkit";
import postsReducer from "@/store/postsSlice";

export const makeStore = () =>
  configureStore({{
    reducer: {{
      posts: postsReducer,
    }},
  }});
{type_exports}"#
    )
}

pub fn redux_thunk() -> PluginBundle {
    PluginBundle {
        initializing_message: Some("Adding Redux Thunk with Axios, Please wait !"),
        success_message: Some("Successfully added Redux Thunk with an async slice !"),
        files: vec![
            FileSpec {
                dir: &["src", "store"],
                name: "store",
                category: FileCategory::Module,
                content: FileContent::Render(thunk_store),
            },
            FileSpec {
                dir: &["src", "store"],
                name: "postsSlice",
                category: FileCategory::Module,
                content: FileContent::Render(thunk_slice),
            },
            FileSpec {
                dir: &["src", "providers"],
                name: "StoreProvider",
                category: FileCategory::Component,
                content: FileContent::Render(store_provider),
            },
        ],
        dependencies: Some(DependencySpec::Literal(
            "@reduxjs/toolkit react-redux axios",
        )),
        entry_patch: Some(EntryPatch {
            layout: Some(LayoutSplice {
                anchor: "body",
                imports: "import StoreProvider from \"@/providers/StoreProvider\";",
                before: "<StoreProvider>",
                after: "</StoreProvider>",
            }),
            page: Some(PageInfo {
                route: "/",
                label: "Redux Thunk",
            }),
            ..Default::default()
        }),
        ..PluginBundle::named("redux-thunk-axios")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webstrap_core::domain::GeneratorKind;

    fn next_ts() -> TemplateContext {
        TemplateContext {
            typed: true,
            generator: GeneratorKind::Next,
        }
    }

    fn next_js() -> TemplateContext {
        TemplateContext {
            typed: false,
            generator: GeneratorKind::Next,
        }
    }

    #[test]
    fn provider_components_are_client_components() {
        for content in [
            query_providers(&next_ts()),
            store_provider(&next_js()),
            apollo_wrapper(&next_ts()),
        ] {
            assert!(content.starts_with("\"use client\";"));
        }
    }

    #[test]
    fn typed_store_provider_types_the_ref() {
        assert!(store_provider(&next_ts()).contains("useRef<AppStore | null>"));
        assert!(store_provider(&next_js()).contains("useRef(null)"));
    }

    #[test]
    fn all_state_bundles_wrap_the_body_anchor() {
        for bundle in [react_query(), rtk_query(), graphql(), redux_thunk()] {
            let layout = bundle.entry_patch.unwrap().layout.unwrap();
            assert_eq!(layout.anchor, "body", "anchor mismatch");
        }
    }

    #[test]
    fn page_info_labels_are_distinct() {
        let labels: Vec<&str> = [react_query(), rtk_query(), graphql(), redux_thunk()]
            .into_iter()
            .map(|b| b.entry_patch.unwrap().page.unwrap().label)
            .collect();
        let mut deduped = labels.clone();
        deduped.dedup();
        assert_eq!(labels, deduped);
    }
}
